// ============================================================================
// Currency Input Binding
// Applies the codec to text fields on registration, typing, blur and submit
// ============================================================================

use crate::domain::FormatConfig;
use crate::interfaces::{CurrencyField, FormatEvent, FormatEventHandler};
use crate::numeric::NumberFormatCodec;
use chrono::Utc;
use std::sync::Arc;

/// UI events a field forwards to the binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed (a keystroke, paste or cut)
    Input,
    /// The field lost focus
    Blur,
}

/// Formats currency fields in place.
///
/// A binding owns only its configuration and event handler. Whether a field
/// is already managed is recorded on the field itself, so nothing is global
/// and several bindings (e.g. one per form or per currency) can coexist.
pub struct CurrencyInputBinding {
    /// Display/plain conversion for this binding's layout
    codec: NumberFormatCodec,

    /// Event handler for processing events
    event_handler: Arc<dyn FormatEventHandler>,
}

impl CurrencyInputBinding {
    /// Creates a binding from configuration
    ///
    /// # Errors
    /// Returns the validation message if `config` is invalid.
    ///
    /// # Example
    /// ```
    /// use currency_format::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let binding =
    ///     CurrencyInputBinding::new(FormatConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
    /// let mut field = TextField::new("monto", "10000");
    /// binding.register(&mut field);
    /// assert_eq!(field.value(), "10.000");
    /// ```
    pub fn new(
        config: FormatConfig,
        event_handler: Arc<dyn FormatEventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            codec: NumberFormatCodec::new(config),
            event_handler,
        })
    }

    pub fn codec(&self) -> &NumberFormatCodec {
        &self.codec
    }

    /// Release a field so the next `register` formats it again.
    ///
    /// Returns false if the field was not bound.
    pub fn unregister<F: CurrencyField + ?Sized>(&self, field: &mut F) -> bool {
        let was_bound = field.is_bound();
        field.set_bound(false);
        was_bound
    }

    /// Take a field under management.
    ///
    /// A non-blank value is assumed to be server-rendered plain text and is
    /// replaced by its display form. Registering an already bound field is a
    /// no-op, whichever binding bound it.
    pub fn register<F: CurrencyField + ?Sized>(&self, field: &mut F) -> Vec<FormatEvent> {
        if field.is_bound() {
            return Vec::new();
        }
        field.set_bound(true);

        let mut events = Vec::new();
        if field.value().trim().is_empty() {
            return events;
        }

        let display = self.codec.to_display(field.value());
        field.set_value(&display);

        if display.is_empty() {
            events.push(FormatEvent::FieldCleared {
                field_id: field.id().to_string(),
                timestamp: Utc::now(),
            });
        } else {
            events.push(FormatEvent::FieldInitialized {
                field_id: field.id().to_string(),
                value: display,
                timestamp: Utc::now(),
            });
        }

        self.notify(&events);
        events
    }

    /// Register several fields at once
    pub fn register_all<'a, F, I>(&self, fields: I) -> Vec<FormatEvent>
    where
        F: CurrencyField + ?Sized + 'a,
        I: IntoIterator<Item = &'a mut F>,
    {
        fields
            .into_iter()
            .flat_map(|field| self.register(field))
            .collect()
    }

    /// Dispatch a UI event to the matching handler
    pub fn handle<F: CurrencyField + ?Sized>(
        &self,
        field: &mut F,
        event: FieldEvent,
    ) -> Vec<FormatEvent> {
        match event {
            FieldEvent::Input => self.on_input(field),
            FieldEvent::Blur => self.on_blur(field),
        }
    }

    /// Reformat while typing and put the caret back next to the same digit.
    ///
    /// A field that refuses the caret move still gets the new value; the
    /// failure is only reported as a `CaretRejected` event.
    pub fn on_input<F: CurrencyField + ?Sized>(&self, field: &mut F) -> Vec<FormatEvent> {
        let before = field.value().to_string();
        let live = self.codec.format_live(&before, field.caret());
        let mut events = Vec::new();

        field.set_value(&live.value);

        if live.is_empty() {
            if !before.is_empty() {
                events.push(FormatEvent::FieldCleared {
                    field_id: field.id().to_string(),
                    timestamp: Utc::now(),
                });
            }
            self.notify(&events);
            return events;
        }

        tracing::debug!(
            field = field.id(),
            before = %before,
            after = %live.value,
            cursor = live.cursor,
            "Formatted currency input"
        );

        if live.value != before {
            events.push(FormatEvent::FieldReformatted {
                field_id: field.id().to_string(),
                before,
                after: live.value.clone(),
                cursor: Some(live.cursor),
                timestamp: Utc::now(),
            });
        }

        if let Err(reason) = field.set_caret(live.cursor) {
            tracing::debug!(field = field.id(), %reason, "Caret not restored");
            events.push(FormatEvent::CaretRejected {
                field_id: field.id().to_string(),
                reason,
                timestamp: Utc::now(),
            });
        }

        self.notify(&events);
        events
    }

    /// Canonicalise the display form when the field loses focus
    pub fn on_blur<F: CurrencyField + ?Sized>(&self, field: &mut F) -> Vec<FormatEvent> {
        let mut events = Vec::new();

        let plain = self.codec.to_plain(field.value());
        if plain.is_empty() {
            return events;
        }

        // A number that cannot be displayed is left as typed
        let display = self.codec.to_display(&plain);
        if display.is_empty() || display == field.value() {
            return events;
        }

        let before = field.value().to_string();
        field.set_value(&display);
        events.push(FormatEvent::FieldReformatted {
            field_id: field.id().to_string(),
            before,
            after: display,
            cursor: None,
            timestamp: Utc::now(),
        });

        self.notify(&events);
        events
    }

    /// Convert every field to plain form right before the form is sent
    pub fn on_submit<'a, F, I>(&self, fields: I) -> Vec<FormatEvent>
    where
        F: CurrencyField + ?Sized + 'a,
        I: IntoIterator<Item = &'a mut F>,
    {
        let mut events = Vec::new();

        for field in fields {
            let plain = self.codec.to_plain(field.value());
            field.set_value(&plain);
            events.push(FormatEvent::FieldNormalized {
                field_id: field.id().to_string(),
                plain,
                timestamp: Utc::now(),
            });
        }

        self.notify(&events);
        events
    }

    fn notify(&self, events: &[FormatEvent]) {
        if !events.is_empty() {
            self.event_handler.on_events(events.to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::TextField;
    use crate::interfaces::{CaretError, NoOpEventHandler, RecordingEventHandler};

    fn binding() -> CurrencyInputBinding {
        CurrencyInputBinding::new(FormatConfig::default(), Arc::new(NoOpEventHandler)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = CurrencyInputBinding::new(
            FormatConfig::new(',', ','),
            Arc::new(NoOpEventHandler),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_register_formats_server_value() {
        let binding = binding();
        let mut field = TextField::new("monto", "1234.5");

        let events = binding.register(&mut field);

        assert_eq!(field.value(), "1.234,50");
        assert!(matches!(
            events.as_slice(),
            [FormatEvent::FieldInitialized { value, .. }] if value == "1.234,50"
        ));
        assert!(field.is_bound());
    }

    #[test]
    fn test_register_twice_is_noop() {
        let binding = binding();
        let mut field = TextField::new("monto", "1234");

        binding.register(&mut field);
        assert_eq!(field.value(), "1.234");

        assert!(binding.register(&mut field).is_empty());
        assert_eq!(field.value(), "1.234");

        assert!(binding.unregister(&mut field));
        assert!(!field.is_bound());
        assert!(!binding.unregister(&mut field));
    }

    #[test]
    fn test_register_fields_sharing_an_id() {
        let binding = binding();
        let mut first = TextField::new("", "1000");
        let mut second = TextField::new("", "2000");

        binding.register(&mut first);
        binding.register(&mut second);

        assert_eq!(first.value(), "1.000");
        assert_eq!(second.value(), "2.000");
    }

    #[test]
    fn test_field_bound_by_another_binding_is_skipped() {
        let guarani = binding();
        let dollars =
            CurrencyInputBinding::new(FormatConfig::english(), Arc::new(NoOpEventHandler))
                .unwrap();
        let mut field = TextField::new("total", "1234.5");

        guarani.register(&mut field);
        assert!(dollars.register(&mut field).is_empty());
        assert_eq!(field.value(), "1.234,50");
    }

    #[test]
    fn test_register_amount_beyond_decimal_range() {
        let binding = binding();
        let mut field = TextField::new("monto", "123456789012345678901234567890");

        binding.register(&mut field);

        assert_eq!(field.value(), "123.456.789.012.345.678.901.234.567.890");
    }

    #[test]
    fn test_blur_keeps_long_typed_amount() {
        let binding = binding();
        let mut field = TextField::new("monto", "");

        for _ in 0..30 {
            field.insert("1");
            binding.on_input(&mut field);
        }
        let typed = field.value().to_string();
        assert_eq!(typed, "111.111.111.111.111.111.111.111.111.111");

        assert!(binding.on_blur(&mut field).is_empty());
        assert_eq!(field.value(), typed);

        binding.on_submit([&mut field]);
        assert_eq!(field.value(), "1".repeat(30));
    }

    #[test]
    fn test_register_blank_and_garbage() {
        let binding = binding();

        let mut blank = TextField::new("blank", "  ");
        assert!(binding.register(&mut blank).is_empty());
        assert_eq!(blank.value(), "  ");

        let mut garbage = TextField::new("garbage", "n/a");
        let events = binding.register(&mut garbage);
        assert_eq!(garbage.value(), "");
        assert!(matches!(events.as_slice(), [FormatEvent::FieldCleared { .. }]));
    }

    #[test]
    fn test_typing_keeps_caret_on_digit() {
        let binding = binding();
        let mut field = TextField::new("monto", "");

        for key in ["1", "0", "0", "0", "0", "0"] {
            field.insert(key);
            binding.on_input(&mut field);
        }

        assert_eq!(field.value(), "100.000");
        assert_eq!(field.caret(), 7);
    }

    #[test]
    fn test_typing_in_the_middle() {
        let binding = binding();
        let mut field = TextField::new("monto", "1.000").with_caret(1);

        field.insert("5");
        let events = binding.handle(&mut field, FieldEvent::Input);

        assert_eq!(field.value(), "15.000");
        assert_eq!(field.caret(), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_typing_decimals() {
        let binding = binding();
        let mut field = TextField::new("monto", "1234");

        for key in [",", "5", "6", "7"] {
            field.insert(key);
            binding.on_input(&mut field);
        }

        assert_eq!(field.value(), "1.234,56");
        assert_eq!(field.caret(), 8);
    }

    #[test]
    fn test_caret_failure_is_swallowed() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let binding =
            CurrencyInputBinding::new(FormatConfig::default(), recorder.clone()).unwrap();
        let mut field = TextField::new("monto", "12345").without_caret_support();

        let events = binding.on_input(&mut field);

        assert_eq!(field.value(), "12.345");
        assert!(events.iter().any(|e| matches!(
            e,
            FormatEvent::CaretRejected {
                reason: CaretError::Unsupported,
                ..
            }
        )));
        assert_eq!(recorder.events(), events);
    }

    #[test]
    fn test_input_clears_garbage() {
        let binding = binding();
        let mut field = TextField::new("monto", "abc");

        let events = binding.on_input(&mut field);

        assert_eq!(field.value(), "");
        assert!(matches!(events.as_slice(), [FormatEvent::FieldCleared { .. }]));

        // Already empty: nothing to report
        assert!(binding.on_input(&mut field).is_empty());
    }

    #[test]
    fn test_blur_canonicalises() {
        let binding = binding();

        let mut trailing = TextField::new("monto", "1.234,");
        binding.handle(&mut trailing, FieldEvent::Blur);
        assert_eq!(trailing.value(), "1.234");

        let mut short_fraction = TextField::new("monto", "1.234,5");
        let events = binding.on_blur(&mut short_fraction);
        assert_eq!(short_fraction.value(), "1.234,50");
        assert!(matches!(
            events.as_slice(),
            [FormatEvent::FieldReformatted { cursor: None, .. }]
        ));

        let mut empty = TextField::new("monto", "");
        assert!(binding.on_blur(&mut empty).is_empty());
        assert_eq!(empty.value(), "");
    }

    #[test]
    fn test_submit_normalises_all_fields() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let binding =
            CurrencyInputBinding::new(FormatConfig::default(), recorder.clone()).unwrap();
        let mut fields = vec![
            TextField::new("monto", "1.234,56"),
            TextField::new("descuento", "10.000"),
            TextField::new("vacio", ""),
        ];

        let events = binding.on_submit(fields.iter_mut());

        let values: Vec<&str> = fields.iter().map(|f| f.value()).collect();
        assert_eq!(values, ["1234.56", "10000", ""]);
        assert_eq!(events.len(), 3);
        assert_eq!(recorder.len(), 3);
    }

    #[test]
    fn test_mixed_field_types() {
        let binding = binding();
        let mut text = TextField::new("a", "1000");
        let mut numeric = TextField::new("b", "2000").without_caret_support();

        let fields: [&mut dyn CurrencyField; 2] = [&mut text, &mut numeric];
        let events = binding.register_all(fields);

        assert_eq!(events.len(), 2);
        assert_eq!(text.value(), "1.000");
        assert_eq!(numeric.value(), "2.000");
    }
}

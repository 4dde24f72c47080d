// ============================================================================
// Live Typing Example
// ============================================================================

use currency_format::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    println!("=== Currency Input Example ===\n");

    let binding = CurrencyInputBinding::new(
        FormatConfig::paraguayan_guarani(),
        Arc::new(LoggingEventHandler),
    )
    .expect("preset config is valid");

    // Server-rendered value
    let mut monto = TextField::new("input_monto", "1500000");
    binding.register(&mut monto);
    println!("Registered:  {}", monto.value());

    // Type an amount key by key
    let mut precio = TextField::new("precio", "");
    for key in ["9", "8", "7", "6", "5", ",", "4", "3"] {
        precio.insert(key);
        binding.handle(&mut precio, FieldEvent::Input);
        println!("Typed {:>2} -> {:<12} caret {}", key, precio.value(), precio.caret());
    }

    binding.handle(&mut precio, FieldEvent::Blur);
    println!("\nAfter blur:  {}", precio.value());

    binding.on_submit([&mut monto, &mut precio]);
    println!("Submitted:   monto={} precio={}", monto.value(), precio.value());

    let codec = binding.codec();
    println!(
        "\nRendered:    {}",
        codec.format_currency(Decimal::new(98765_43, 2))
    );
}

//! Pattern 3: Behavioral
//! Example: Payment Strategies
//!
//! Run with: cargo run --example p3_payment_strategy
//! Show delegation: RUST_LOG=debug cargo run --example p3_payment_strategy

use colored::Colorize;
use gamma_patterns::behavioral::strategy::{
    from_fn, CreditCardPayment, PayPalPayment, PaymentContext, PaymentStrategy,
};
use gamma_patterns::logging::init_logging;

fn main() {
    init_logging();

    println!("{}", "=== Strategy Fixed at Construction ===".bold());
    // Usage: Each context forwards to its own strategy and nothing else.
    let card = PaymentContext::new(CreditCardPayment);
    let paypal = PaymentContext::new(PayPalPayment);
    println!("{}", card.pay(100));
    println!("{}", paypal.pay(200));

    println!("\n{}", "=== Closure as a Strategy ===".bold());
    let voucher = PaymentContext::new(from_fn("Voucher", |amount| {
        format!("Redeemed voucher worth {amount}")
    }));
    println!("{}", voucher.pay(50));

    println!("\n{}", "=== Strategy Picked at Runtime ===".bold());
    let use_paypal = std::env::args().any(|arg| arg == "--paypal");
    let strategy: Box<dyn PaymentStrategy> = if use_paypal {
        Box::new(PayPalPayment)
    } else {
        Box::new(CreditCardPayment)
    };
    let checkout = PaymentContext::new(strategy);
    println!("Using {}: {}", checkout.strategy().name(), checkout.pay(75));
}

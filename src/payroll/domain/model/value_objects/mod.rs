pub mod money_cents;

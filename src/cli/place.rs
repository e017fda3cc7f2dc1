//! The order flow: collect fields, submit, report.
//!
//! Prompts run in a fixed order (symbol, side, order type, quantity, and the
//! price for LIMIT orders only). Any failure along the way ends the flow at
//! [`execute`], which logs it once at ERROR and prints it once.

use tracing::error;

use crate::cli::output;
use crate::cli::prompt::Prompter;
use crate::cli::PlaceArgs;
use crate::domain::{parse_decimal, validate_order_type, OrderType};
use crate::error::Result;
use crate::exchange::{OrderClient, OrderReceipt};
use crate::service::OrderService;

pub const SYMBOL_PROMPT: &str = "Enter symbol (e.g., BTCUSDT)";
pub const SIDE_PROMPT: &str = "Side (BUY/SELL)";
pub const ORDER_TYPE_PROMPT: &str = "Order Type (MARKET/LIMIT)";
pub const QUANTITY_PROMPT: &str = "Quantity";
pub const PRICE_PROMPT: &str = "Limit Price";

const SUBMITTING: &str = "Submitting order...";

/// Run one order through the flow and report the outcome.
///
/// Returns the receipt when the order filled. Errors never propagate past
/// this point.
pub async fn execute<C, P>(
    service: &OrderService<C>,
    prompter: &mut P,
    args: &PlaceArgs,
) -> Option<OrderReceipt>
where
    C: OrderClient,
    P: Prompter + ?Sized,
{
    match submit(service, prompter, args).await {
        Ok(receipt) => Some(receipt),
        Err(e) => {
            error!("Error: {e}");
            output::error(&format!("Error: {e}"));
            None
        }
    }
}

async fn submit<C, P>(
    service: &OrderService<C>,
    prompter: &mut P,
    args: &PlaceArgs,
) -> Result<OrderReceipt>
where
    C: OrderClient,
    P: Prompter + ?Sized,
{
    let symbol = answer(prompter, args.symbol.as_deref(), SYMBOL_PROMPT)?;
    let side = answer(prompter, args.side.as_deref(), SIDE_PROMPT)?;
    let order_type = answer(prompter, args.order_type.as_deref(), ORDER_TYPE_PROMPT)?;
    let quantity = answer(prompter, args.quantity.as_deref(), QUANTITY_PROMPT)?;
    let quantity = parse_decimal("quantity", &quantity)?;

    let receipt = match validate_order_type(&order_type)? {
        OrderType::Market => {
            output::with_spinner(
                SUBMITTING,
                service.place_market_order(&symbol, &side, quantity),
            )
            .await?
        }
        OrderType::Limit => {
            let price = answer(prompter, args.price.as_deref(), PRICE_PROMPT)?;
            let price = parse_decimal("price", &price)?;
            output::with_spinner(
                SUBMITTING,
                service.place_limit_order(&symbol, &side, quantity, price),
            )
            .await?
        }
    };

    output::receipt(&receipt)?;
    Ok(receipt)
}

/// Use the preset value when one was given, otherwise ask.
fn answer<P: Prompter + ?Sized>(
    prompter: &mut P,
    preset: Option<&str>,
    label: &str,
) -> Result<String> {
    match preset {
        Some(value) => Ok(value.trim().to_string()),
        None => prompter.ask(label),
    }
}

use crate::cli::parser::Commands;
use crate::core::OrderLogic;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{header, info, success};
use crate::ui::render::render_data;
use crate::utils::path::expand_tilde;
use serde_json::Value;
use std::fs;

/// Handle the order-level commands (`orders`, `kitchen-list`, `payment`,
/// `order-status`, `create-order`).
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    let gateway = session.gateway()?;

    match cmd {
        Commands::Orders { json } => {
            let data = OrderLogic::orders(&gateway)?;
            show(&data, *json, "📦 Orders");
        }
        Commands::KitchenList { json } => {
            let data = OrderLogic::kitchen_list(&gateway)?;
            show(&data, *json, "🍱 Kitchen Order List");
        }
        Commands::Payment { order, status } => {
            let data = OrderLogic::update_payment(&gateway, order, status)?;
            success(format!("Payment status of {} set to {}", order.trim(), status.trim()));
            print!("{}", render_data(&data));
        }
        Commands::OrderStatus { order, status } => {
            let data = OrderLogic::update_status(&gateway, order, status)?;
            success(format!("Status of {} set to {}", order.trim(), status.trim()));
            print!("{}", render_data(&data));
        }
        Commands::CreateOrder { data } => {
            let order_data = read_order_data(data)?;
            let out = OrderLogic::create(&gateway, order_data)?;
            success("Order created");
            print!("{}", render_data(&out));
        }
        _ => {}
    }
    Ok(())
}

fn show(data: &Value, raw: bool, title: &str) {
    if raw {
        println!(
            "{}",
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
        );
        return;
    }

    header(title);
    let text = render_data(data);
    if text.trim().is_empty() {
        info("Nothing to show.");
    } else {
        print!("{}", text);
    }
}

/// `--data` is inline JSON, or `@path` to read it from a file.
fn read_order_data(arg: &str) -> AppResult<Value> {
    let text = match arg.trim().strip_prefix('@') {
        Some(path) => fs::read_to_string(expand_tilde(path))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&text)
        .map_err(|e| AppError::InvalidInput(format!("Invalid order JSON: {e}")))
}

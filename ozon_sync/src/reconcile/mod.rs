//! Matching distributor records against Ozon listings

mod prices;
mod stocks;

pub use prices::create_prices;
pub use stocks::{
    create_stocks, stock_from_quantity, MAX_STOCK, PLENTY_QUANTITY, UNAVAILABLE_QUANTITY,
};

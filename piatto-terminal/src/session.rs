use anyhow::Result;
use piatto_catalog::{extra_cheese, Catalog, CatalogError, ItemModifier};
use piatto_order::{
    available_methods, checkout, AddressSource, Category, CheckoutError, Customer, Order,
    OrderRegistry, StandardPricing,
};
use piatto_shared::PromoBroadcastEvent;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::config::TerminalConfig;

/// Item names shown on the board for each category. The core only ever sees
/// the validated name after a catalog lookup.
fn board(category: Category) -> &'static [&'static str] {
    match category {
        Category::Pizza => &["Pepperoni Pizza", "Cheese Pizza", "4 Season Pizza"],
        Category::Drink => &["Coca-cola", "Water"],
        Category::Snack => &["French Fries", "Country Potatoes"],
        Category::Coffee => &["Cappuccino", "Latte"],
        Category::Dessert => &["Tiramisu", "Brownie"],
    }
}

/// One interactive order-composition session: prompts, parsing and display
/// live here; the order/pricing core only receives validated selections.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    config: TerminalConfig,
    registry: &'a OrderRegistry,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        catalog: Catalog,
        config: TerminalConfig,
        registry: &'a OrderRegistry,
    ) -> Self {
        Self {
            input,
            output,
            catalog,
            config,
            registry,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Piatto Pizzeria!")?;

        let Some(name) = self.prompt("Your name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Your phone number: ")? else {
            return Ok(());
        };

        self.registry
            .add_subscriber(Arc::new(Customer::new(name, phone)));
        let report = self.registry.notify_all(&self.config.promo.message);
        let event = PromoBroadcastEvent {
            message: self.config.promo.message.clone(),
            subscriber_count: report.attempted,
            failed_count: report.failures.len(),
            timestamp: chrono::Utc::now().timestamp(),
        };
        tracing::info!(
            event = %serde_json::to_string(&event).unwrap_or_default(),
            "promo broadcast"
        );
        writeln!(self.output, ">> {}", self.config.promo.message)?;

        let mut order = Order::new();
        loop {
            writeln!(self.output, "What do you want to order?")?;
            for (i, category) in Category::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, category.label())?;
            }
            let Some(choice) = self.prompt("q. Done\n> ")? else {
                break;
            };

            match choice.as_str() {
                "q" => break,
                "1" => self.select_from(Category::Pizza, &mut order)?,
                "2" => self.select_from(Category::Drink, &mut order)?,
                "3" => self.select_from(Category::Snack, &mut order)?,
                "4" => self.select_from(Category::Coffee, &mut order)?,
                "5" => self.select_from(Category::Dessert, &mut order)?,
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }

        if order.is_empty() {
            writeln!(self.output, "Nothing ordered. See you next time!")?;
            return Ok(());
        }

        writeln!(self.output, "Order summary:")?;
        for item in order.items() {
            writeln!(
                self.output,
                "{} - {}",
                item.name,
                self.format_cents(item.price_cents)
            )?;
        }
        writeln!(
            self.output,
            "Subtotal: {}",
            self.format_cents(order.subtotal_cents())
        )?;

        writeln!(self.output, "Select a delivery option:")?;
        for (i, method) in available_methods().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, method.describe())?;
        }
        let ordinal = self
            .prompt("> ")?
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(0);

        let discount = self.config.promo.discount;
        let registry = self.registry;
        match checkout(order, &StandardPricing, discount, ordinal, self, registry) {
            Ok(placed) => {
                writeln!(
                    self.output,
                    "Total after discount: {}",
                    self.format_cents(placed.total_cents)
                )?;
                if let Some(address) = &placed.address {
                    writeln!(self.output, "Delivering to: {address}")?;
                } else {
                    writeln!(self.output, "Your order will be waiting for you!")?;
                }
                writeln!(self.output, "Thank you for ordering from Piatto Pizzeria!")?;
            }
            Err(CheckoutError::Delivery(err)) => {
                writeln!(self.output, "{err}. Order cancelled.")?;
            }
            Err(CheckoutError::Pricing(err)) => {
                writeln!(self.output, "Cannot price this order: {err}")?;
            }
        }

        Ok(())
    }

    fn select_from(&mut self, category: Category, order: &mut Order) -> Result<()> {
        writeln!(self.output, "Select a {} from the menu:", category.label())?;
        for name in board(category) {
            if let Ok(item) = self.catalog.lookup(name) {
                writeln!(
                    self.output,
                    "{} - {}",
                    item.name,
                    self.format_cents(item.price_cents)
                )?;
            }
        }

        let Some(name) = self.prompt("> ")? else {
            return Ok(());
        };
        let mut item = match self.catalog.lookup(&name) {
            Ok(item) => item,
            Err(CatalogError::NotFound(name)) => {
                writeln!(self.output, "We don't have \"{name}\" today.")?;
                return Ok(());
            }
        };

        if category == Category::Pizza {
            let topping = extra_cheese();
            let question = format!(
                "Add {} ({})? (y/n) ",
                topping.label,
                self.format_cents(topping.surcharge_cents)
            );
            if let Some(answer) = self.prompt(&question)? {
                if answer.eq_ignore_ascii_case("y") {
                    item = topping.apply(&item);
                }
            }
        }

        writeln!(self.output, "{} added to your order.", item.name)?;
        order.add_line_item(category, item);
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn format_cents(&self, cents: i64) -> String {
        format!("{}{}.{:02}", self.config.currency, cents / 100, cents % 100)
    }
}

impl<R: BufRead, W: Write> AddressSource for Session<'_, R, W> {
    fn read_address(&mut self) -> Option<String> {
        let address = self.prompt("Please write your address: ").ok().flatten()?;
        if address.is_empty() {
            None
        } else {
            Some(address)
        }
    }
}

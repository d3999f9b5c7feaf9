//! Line-oriented operator menu on top of an [`InventoryClient`].

mod render;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, instrument};

use crate::app_system::SystemError;
use crate::clients::InventoryClient;
use crate::domain::{ProductCreate, SortKey};
use crate::error::InventoryError;
use crate::store::UndoOutcome;

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads the next answer or leaves the action when input is exhausted.
macro_rules! answer {
    ($self:ident, $prompt:expr) => {
        match $self.prompt($prompt).await? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct MenuController<R, W> {
    client: InventoryClient,
    input: Lines<R>,
    output: W,
}

impl<R, W> MenuController<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: InventoryClient, input: R, output: W) -> Self {
        Self {
            client,
            input: input.lines(),
            output,
        }
    }

    /// Runs until the operator chooses Exit or input ends.
    #[instrument(name = "menu", skip(self))]
    pub async fn run(mut self) -> Result<(), SystemError> {
        loop {
            self.write(render::MENU).await?;
            let Some(choice) = self.prompt("Enter your choice: ").await? else {
                break;
            };
            debug!(choice = %choice.trim(), "Menu choice");

            let flow = match choice.trim().parse::<u32>() {
                Ok(1) => self.add_product().await?,
                Ok(2) => self.update_quantity().await?,
                Ok(3) => self.view_products().await?,
                Ok(4) => self.search_product().await?,
                Ok(5) => self.low_stock_alerts().await?,
                Ok(6) => self.transaction_history().await?,
                Ok(7) => self.statistics().await?,
                Ok(8) => self.undo_last_update().await?,
                Ok(9) => {
                    self.say("Exiting...").await?;
                    Flow::Exit
                }
                _ => {
                    self.say("Invalid choice").await?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush().await?;
        Ok(())
    }

    async fn add_product(&mut self) -> Result<Flow, SystemError> {
        let sku = answer!(self, "Enter SKU: ").trim().to_string();

        match self.client.search_product(sku.clone()).await {
            Ok(_) => {
                self.say(" SKU already exists").await?;
                return Ok(Flow::Continue);
            }
            Err(InventoryError::NotFound(_)) => {}
            Err(e) => return self.report(e).await,
        }

        let name = answer!(self, "Enter Name: ");
        let category = answer!(self, "Enter Category: ");
        let price = answer!(self, "Enter Price: ");
        let Some(price) = price.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0) else {
            self.say("Invalid price").await?;
            return Ok(Flow::Continue);
        };
        let quantity = answer!(self, "Enter Quantity: ");
        let Ok(quantity) = quantity.trim().parse::<u32>() else {
            self.say("Invalid quantity").await?;
            return Ok(Flow::Continue);
        };

        let product = ProductCreate {
            sku,
            name,
            category,
            price,
            quantity,
        };
        match self.client.add_product(product).await {
            Ok(outcome) => {
                if outcome.low_stock_alert {
                    self.say(&format!(" Low stock alert for {}", outcome.sku)).await?;
                }
                self.say(" Product added successfully!").await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn update_quantity(&mut self) -> Result<Flow, SystemError> {
        let sku = answer!(self, "Enter SKU: ").trim().to_string();

        if let Err(e) = self.client.search_product(sku.clone()).await {
            return self.report(e).await;
        }

        let quantity = answer!(self, "Enter new quantity: ");
        let Ok(quantity) = quantity.trim().parse::<u32>() else {
            self.say("Invalid quantity").await?;
            return Ok(Flow::Continue);
        };

        match self.client.update_quantity(sku, quantity).await {
            Ok(change) => {
                if change.low_stock_alert {
                    self.say(&format!(" Low stock alert for {}", change.sku)).await?;
                }
                self.say(" Quantity updated successfully!").await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn view_products(&mut self) -> Result<Flow, SystemError> {
        let sort = answer!(self, "Sort by (sku/price/value/name): ");
        let sort_key = match sort.parse::<SortKey>() {
            Ok(key) => key,
            Err(e) => return self.report(e).await,
        };

        match self.client.view_products(sort_key).await {
            Ok(products) => {
                self.write(&render::product_table(&products)).await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn search_product(&mut self) -> Result<Flow, SystemError> {
        let sku = answer!(self, "Enter SKU to search: ").trim().to_string();

        match self.client.search_product(sku).await {
            Ok(product) => {
                self.say(&product.to_string()).await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn low_stock_alerts(&mut self) -> Result<Flow, SystemError> {
        match self.client.low_stock_report().await {
            Ok(alerts) => {
                self.write(&render::low_stock(&alerts)).await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn transaction_history(&mut self) -> Result<Flow, SystemError> {
        let count = answer!(self, "Enter number of transactions: ");
        let Ok(count) = count.trim().parse::<i64>() else {
            self.say("Invalid number").await?;
            return Ok(Flow::Continue);
        };

        match self.client.transaction_report(count).await {
            Ok(records) => {
                self.write(&render::lines(&records)).await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn statistics(&mut self) -> Result<Flow, SystemError> {
        match self.client.statistics().await {
            Ok(stats) => {
                self.write(&render::statistics(&stats)).await?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e).await,
        }
    }

    async fn undo_last_update(&mut self) -> Result<Flow, SystemError> {
        match self.client.undo_last_update().await {
            Ok(UndoOutcome::NothingToUndo) => self.say("Nothing to undo").await?,
            Ok(UndoOutcome::Restored { .. }) => self.say(" Last update undone!").await?,
            // the service logs it; the operator sees nothing
            Ok(UndoOutcome::ProductMissing { .. }) => {}
            Err(e) => return self.report(e).await,
        }
        Ok(Flow::Continue)
    }

    /// Shows a failed request to the operator. A stopped service ends the menu.
    async fn report(&mut self, error: InventoryError) -> Result<Flow, SystemError> {
        self.say(&format!(" {error}")).await?;
        match error {
            InventoryError::ActorCommunicationError(_) => Ok(Flow::Exit),
            _ => Ok(Flow::Continue),
        }
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>, SystemError> {
        self.write(text).await?;
        self.output.flush().await?;
        Ok(self.input.next_line().await?)
    }

    async fn say(&mut self, line: &str) -> Result<(), SystemError> {
        self.write(line).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> Result<(), SystemError> {
        self.output.write_all(text.as_bytes()).await?;
        Ok(())
    }
}

//! Interactive store session: login, role menus and dispatch.

use std::time::Duration;

use anyhow::Result;
use fash_auth::{Authenticator, Principal, Role};
use fash_commerce::prelude::*;
use tracing::debug;

use crate::config::StoreConfig;
use crate::display;
use crate::output::Output;
use crate::prompt::Prompt;

/// Manager menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerAction {
    AddProduct,
    BrowseProducts,
    ViewOrderHistory,
    Logout,
}

impl ManagerAction {
    pub const ALL: [ManagerAction; 4] = [
        ManagerAction::AddProduct,
        ManagerAction::BrowseProducts,
        ManagerAction::ViewOrderHistory,
        ManagerAction::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ManagerAction::AddProduct => "Add Product",
            ManagerAction::BrowseProducts => "Browse Products",
            ManagerAction::ViewOrderHistory => "View Order History",
            ManagerAction::Logout => "Logout",
        }
    }

    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

/// Customer menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    BrowseProducts,
    AddItemToCart,
    ViewCart,
    PlaceOrder,
    ViewOrderHistory,
    Logout,
}

impl CustomerAction {
    pub const ALL: [CustomerAction; 6] = [
        CustomerAction::BrowseProducts,
        CustomerAction::AddItemToCart,
        CustomerAction::ViewCart,
        CustomerAction::PlaceOrder,
        CustomerAction::ViewOrderHistory,
        CustomerAction::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomerAction::BrowseProducts => "Browse Products",
            CustomerAction::AddItemToCart => "Add Item to Cart",
            CustomerAction::ViewCart => "View Cart",
            CustomerAction::PlaceOrder => "Place Order",
            CustomerAction::ViewOrderHistory => "View Order History",
            CustomerAction::Logout => "Logout",
        }
    }

    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

/// Whether the menu loop keeps running after an action.
enum Flow {
    Continue,
    Logout,
}

/// One run of the store: repeated logins against a shared platform.
pub struct Session<'a, A, P> {
    platform: Platform,
    auth: &'a A,
    prompt: P,
    output: &'a Output,
    store: &'a StoreConfig,
}

impl<'a, A: Authenticator, P: Prompt> Session<'a, A, P> {
    pub fn new(
        platform: Platform,
        auth: &'a A,
        prompt: P,
        output: &'a Output,
        store: &'a StoreConfig,
    ) -> Self {
        Self {
            platform,
            auth,
            prompt,
            output,
            store,
        }
    }

    /// Run until the user quits at the login prompt.
    pub fn run(&mut self) -> Result<()> {
        while let Some(principal) = self.login()? {
            match principal.role {
                Role::Manager => self.manager_menu(&principal)?,
                Role::Customer => self.customer_menu(&principal)?,
            }
        }
        self.output.info("Goodbye.");
        Ok(())
    }

    /// The store state, for inspection once the session ends.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Prompt until a login succeeds. `None` means the user chose to quit.
    fn login(&mut self) -> Result<Option<Principal>> {
        loop {
            self.output.banner(&self.store.name);
            self.output.line("Login as:");
            for role in Role::ALL {
                self.output.menu_item(role.menu_number(), role.display_name());
            }

            let choice = self.prompt.line("Enter your choice (q to quit)")?;
            if matches!(choice.to_lowercase().as_str(), "q" | "quit" | "exit") {
                return Ok(None);
            }
            let role = choice.parse().ok().and_then(Role::from_menu_number);

            let username = self.prompt.line("Enter username")?;
            let password = self.prompt.password("Enter password")?;

            let Some(role) = role else {
                debug!(choice = %choice, "Unknown role selection");
                self.output.error("Invalid credentials. Please try again.");
                continue;
            };

            match self.auth.authenticate(role, &username, &password) {
                Ok(principal) => {
                    self.output
                        .success(&format!("{} login successful.", role.display_name()));
                    return Ok(Some(principal));
                }
                Err(e) => self.output.error(&e.to_string()),
            }
        }
    }

    fn read_choice(&mut self) -> Result<Option<u32>> {
        let raw = self.prompt.line("Enter your choice")?;
        Ok(raw.parse().ok())
    }

    fn invalid_choice(&self) {
        self.output.error("Invalid choice. Please try again.");
    }

    fn manager_menu(&mut self, principal: &Principal) -> Result<()> {
        loop {
            self.output.banner(&self.store.name);
            self.output.header("E-Commerce Platform Menu:");
            for (number, action) in (1..).zip(ManagerAction::ALL) {
                self.output.menu_item(number, action.label());
            }

            let Some(action) = self.read_choice()?.and_then(ManagerAction::from_choice) else {
                self.invalid_choice();
                continue;
            };
            debug!(user = %principal.username, ?action, "Manager action");

            let outcome = match action {
                ManagerAction::AddProduct => self.add_product(),
                ManagerAction::BrowseProducts => {
                    display::products(self.output, &self.platform.browse_products());
                    Ok(Flow::Continue)
                }
                ManagerAction::ViewOrderHistory => {
                    display::order_history(self.output, self.platform.view_order_history());
                    Ok(Flow::Continue)
                }
                ManagerAction::Logout => Ok(Flow::Logout),
            };

            if let Flow::Logout = self.settle(outcome)? {
                self.logout();
                return Ok(());
            }
        }
    }

    fn customer_menu(&mut self, principal: &Principal) -> Result<()> {
        loop {
            self.output.banner(&self.store.name);
            self.output.header("E-Commerce Platform Menu:");
            for (number, action) in (1..).zip(CustomerAction::ALL) {
                self.output.menu_item(number, action.label());
            }

            let Some(action) = self.read_choice()?.and_then(CustomerAction::from_choice) else {
                self.invalid_choice();
                continue;
            };
            debug!(user = %principal.username, ?action, "Customer action");

            let outcome = match action {
                CustomerAction::BrowseProducts => {
                    display::products(self.output, &self.platform.browse_products());
                    Ok(Flow::Continue)
                }
                CustomerAction::AddItemToCart => self.add_item_to_cart(),
                CustomerAction::ViewCart => self.view_cart(),
                CustomerAction::PlaceOrder => self.place_order(principal),
                CustomerAction::ViewOrderHistory => {
                    display::order_history(self.output, self.platform.view_order_history());
                    Ok(Flow::Continue)
                }
                CustomerAction::Logout => Ok(Flow::Logout),
            };

            if let Flow::Logout = self.settle(outcome)? {
                self.logout();
                return Ok(());
            }
        }
    }

    /// Report a store error and carry on; input failures end the session.
    fn settle(&self, outcome: Result<Flow>) -> Result<Flow> {
        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) => match e.downcast_ref::<CommerceError>() {
                Some(store_error) => {
                    debug!(kind = store_error.kind().as_str(), "Operation failed");
                    self.output.error(&format!("Error: {}", store_error));
                    Ok(Flow::Continue)
                }
                None => Err(e),
            },
        }
    }

    fn add_product(&mut self) -> Result<Flow> {
        let id = self.prompt.integer("Enter Product ID")?;
        let name = self.prompt.line("Enter Product Name")?;
        let price = self.prompt.decimal("Enter Product Price")?;
        let stock = self.prompt.integer("Enter Product Stock")?;

        let product = Product::with_decimal_price(
            ProductId::new(id),
            name,
            price,
            self.platform.currency(),
            stock,
        )?;
        if let Some(replaced) = self.platform.add_product(product)? {
            self.output.warn(&format!(
                "Replaced existing product {} ({}).",
                replaced.id, replaced.name
            ));
        }
        self.output.success("Product added successfully.");
        Ok(Flow::Continue)
    }

    fn add_item_to_cart(&mut self) -> Result<Flow> {
        let id = self.prompt.integer("Enter Product ID to add to cart")?;
        let quantity = self.prompt.integer("Enter Quantity")?;

        let added = self
            .platform
            .add_item_to_cart(ProductId::new(id), quantity)?;
        self.output.success(&format!(
            "Added {} of {} to the cart.",
            added.added, added.product_name
        ));
        Ok(Flow::Continue)
    }

    fn view_cart(&mut self) -> Result<Flow> {
        let view = self.platform.view_cart()?;
        display::cart(self.output, &view);
        if view.is_empty() || self.output.is_json() {
            return Ok(Flow::Continue);
        }

        let items: Vec<(ProductId, String)> = view
            .lines
            .iter()
            .map(|line| {
                (
                    line.product.id,
                    format!("{} (x{})", line.product.name, line.quantity),
                )
            })
            .collect();

        if !self.prompt.confirm("Remove an item from the cart?", false)? {
            return Ok(Flow::Continue);
        }
        let labels: Vec<String> = items.iter().map(|(_, label)| label.clone()).collect();
        let Some((product_id, label)) = items.get(self.prompt.select("Item to remove", &labels)?)
        else {
            self.invalid_choice();
            return Ok(Flow::Continue);
        };

        let restored = self.platform.remove_item_from_cart(*product_id)?;
        self.output.success(&format!(
            "Removed {} from the cart; {} returned to stock.",
            label, restored
        ));
        Ok(Flow::Continue)
    }

    fn place_order(&mut self, principal: &Principal) -> Result<Flow> {
        let order = self.platform.place_order(&principal.username)?;
        display::order(self.output, order);
        Ok(Flow::Continue)
    }

    fn logout(&self) {
        self.output.success("Logged out successfully.");
        self.output.pause(
            "Logging out...",
            Duration::from_millis(self.store.logout_delay_ms),
        );
        self.output.clear_screen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::ScriptedPrompt;
    use fash_auth::CredentialStore;

    fn store_config() -> StoreConfig {
        StoreConfig {
            logout_delay_ms: 0,
            ..StoreConfig::default()
        }
    }

    fn credentials() -> CredentialStore {
        CredentialStore::new()
            .with_account(Role::Manager, "admin", "admin123")
            .unwrap()
            .with_account(Role::Customer, "user", "user123")
            .unwrap()
    }

    fn run_script(platform: Platform, answers: &[&str]) -> (Result<()>, Platform, ScriptedPrompt) {
        let auth = credentials();
        let output = Output::new(false, false);
        let store = store_config();
        let prompt = ScriptedPrompt::new(answers.iter().copied());
        let mut session = Session::new(platform, &auth, prompt, &output, &store);
        let result = session.run();
        let Session { platform, prompt, .. } = session;
        (result, platform, prompt)
    }

    fn shirt_platform() -> Platform {
        let mut platform = Platform::new(Currency::USD);
        platform
            .add_product(
                Product::with_decimal_price(ProductId::new(1), "Shirt", 20.0, Currency::USD, 10)
                    .unwrap(),
            )
            .unwrap();
        platform
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(ManagerAction::from_choice(1), Some(ManagerAction::AddProduct));
        assert_eq!(ManagerAction::from_choice(4), Some(ManagerAction::Logout));
        assert_eq!(ManagerAction::from_choice(0), None);
        assert_eq!(ManagerAction::from_choice(5), None);
        assert_eq!(CustomerAction::from_choice(4), Some(CustomerAction::PlaceOrder));
        assert_eq!(CustomerAction::from_choice(6), Some(CustomerAction::Logout));
        assert_eq!(CustomerAction::from_choice(7), None);
    }

    #[test]
    fn test_quit_at_login() {
        let (result, _, prompt) = run_script(Platform::default(), &["q"]);
        result.unwrap();
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_failed_login_then_manager_adds_product() {
        let (result, platform, prompt) = run_script(
            Platform::new(Currency::USD),
            &[
                // wrong password, then a role that does not exist
                "1", "admin", "nope",
                "9", "admin", "admin123",
                // manager login
                "1", "admin", "admin123",
                "1", "1", "Shirt", "20.00", "10",
                "2",
                "4",
                "q",
            ],
        );
        result.unwrap();
        assert_eq!(prompt.remaining(), 0);
        let shirt = platform.product(ProductId::new(1)).unwrap();
        assert_eq!(shirt.name, "Shirt");
        assert_eq!(shirt.stock(), 10);
    }

    #[test]
    fn test_customer_buys_shirts() {
        let (result, platform, _) = run_script(
            shirt_platform(),
            &[
                "2", "user", "user123",
                "2", "1", "3",
                "4",
                "5",
                "6",
                "q",
            ],
        );
        result.unwrap();
        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 7);
        assert!(platform.cart().is_empty());

        let orders = platform.view_order_history();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total().display(), "$60.00");
        assert_eq!(orders[0].placed_by(), "user");
    }

    #[test]
    fn test_store_errors_do_not_end_the_session() {
        let (result, platform, _) = run_script(
            shirt_platform(),
            &[
                "2", "user", "user123",
                // empty-cart checkout, unknown product, zero quantity, too many
                "4",
                "2", "99", "1",
                "2", "1", "0",
                "2", "1", "11",
                // out-of-range and non-numeric menu choices
                "7",
                "abc",
                "6",
                "q",
            ],
        );
        result.unwrap();
        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 10);
        assert!(platform.cart().is_empty());
        assert!(platform.view_order_history().is_empty());
    }

    #[test]
    fn test_manager_rejects_invalid_product() {
        let (result, platform, _) = run_script(
            Platform::new(Currency::USD),
            &[
                "1", "admin", "admin123",
                "1", "5", "Hat", "-3", "1",
                "4",
                "q",
            ],
        );
        result.unwrap();
        assert!(platform.browse_products().is_empty());
    }

    #[test]
    fn test_view_cart_can_remove_item() {
        let (result, platform, _) = run_script(
            shirt_platform(),
            &[
                "2", "user", "user123",
                "2", "1", "4",
                "3", "y", "0",
                "3",
                "6",
                "q",
            ],
        );
        result.unwrap();
        assert!(platform.cart().is_empty());
        assert_eq!(platform.product(ProductId::new(1)).unwrap().stock(), 10);
    }

    #[test]
    fn test_cart_survives_logout() {
        let (result, platform, _) = run_script(
            shirt_platform(),
            &[
                "2", "user", "user123",
                "2", "1", "2",
                "6",
                "2", "user", "user123",
                "4",
                "6",
                "q",
            ],
        );
        result.unwrap();
        assert_eq!(platform.view_order_history().len(), 1);
        assert_eq!(platform.view_order_history()[0].item_count().unwrap(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _, prompt) = run_script(Platform::default(), &["2", "user"]);
        assert!(result.is_err());
        assert_eq!(
            prompt.asked,
            vec!["Enter your choice (q to quit)", "Enter username", "Enter password"]
        );
    }
}

//! CLI configuration.

use anyhow::{anyhow, Context, Result};
use fash_auth::{CredentialStore, Role};
use fash_commerce::prelude::*;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FashConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Login accounts.
    #[serde(default = "default_accounts")]
    pub accounts: Vec<AccountConfig>,

    /// Products loaded into the catalog at startup.
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

impl Default for FashConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            accounts: default_accounts(),
            products: Vec::new(),
        }
    }
}

impl FashConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// The store currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.store.currency)
            .ok_or_else(|| anyhow!("Unsupported currency: {}", self.store.currency))
    }

    /// Build the credential store from the configured accounts.
    pub fn credential_store(&self) -> Result<CredentialStore> {
        let mut store = CredentialStore::new();
        for account in &self.accounts {
            store
                .add_account(account.role, &account.username, &account.password)
                .with_context(|| format!("Invalid account: {}", account.username))?;
        }
        Ok(store)
    }

    /// Build a platform with the seed catalog loaded.
    pub fn build_platform(&self) -> Result<Platform> {
        let currency = self.currency()?;
        let mut platform = Platform::new(currency);
        for seed in &self.products {
            if platform.product(ProductId::new(seed.id)).is_some() {
                return Err(anyhow!("Duplicate product id in config: {}", seed.id));
            }
            let product = Product::with_decimal_price(
                ProductId::new(seed.id),
                &seed.name,
                seed.price,
                currency,
                seed.stock,
            )
            .with_context(|| format!("Invalid product {} in config", seed.id))?;
            platform.add_product(product)?;
        }
        Ok(platform)
    }

    /// Check every section, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        let store = self.credential_store()?;
        for role in Role::ALL {
            if store.count_for(role) == 0 {
                return Err(anyhow!("No {} account configured", role));
            }
        }
        self.build_platform()?;
        Ok(())
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Title shown in the banner.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code for all prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// How long the logout spinner shows, in milliseconds.
    #[serde(default = "default_logout_delay_ms")]
    pub logout_delay_ms: u64,
}

fn default_store_name() -> String {
    "FASH-HUB".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_logout_delay_ms() -> u64 {
    2000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
            logout_delay_ms: default_logout_delay_ms(),
        }
    }
}

/// A login account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub role: Role,
    pub username: String,
    pub password: String,
}

fn default_accounts() -> Vec<AccountConfig> {
    vec![
        AccountConfig {
            role: Role::Manager,
            username: "admin".to_string(),
            password: "admin123".to_string(),
        },
        AccountConfig {
            role: Role::Customer,
            username: "user".to_string(),
            password: "user123".to_string(),
        },
    ]
}

/// A product preloaded into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSeed {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Generate a default fash.toml config file.
pub fn generate_default_config() -> String {
    r#"# FASH-HUB store configuration

[store]
name = "FASH-HUB"
currency = "USD"
logout_delay_ms = 2000

[[accounts]]
role = "manager"
username = "admin"
password = "admin123"

[[accounts]]
role = "customer"
username = "user"
password = "user123"

# [[products]]
# id = 1
# name = "Shirt"
# price = 20.00
# stock = 10
"#
    .to_string()
}

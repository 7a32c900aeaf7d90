//! Command-line configuration for the `catalog` binary.

use crate::http::DeleteStyle;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use resource_store::{Coercion, IdMatch, IdStrategy, StoreOptions};
use std::net::SocketAddr;

/// How a store issues identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdScheme {
    /// Wall-clock milliseconds, as integers.
    Timestamp,
    /// Random alphanumeric tokens of `--token-length` characters.
    Random,
    /// 1, 2, 3, ...
    Sequential,
}

/// How a path identifier is compared with stored identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lookup {
    /// `01` does not find record `1`.
    Exact,
    /// Any numeric spelling finds an integer identifier.
    Coercing,
}

/// What happens to a numeric field holding something that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Numbers {
    /// Store 0.
    Lenient,
    /// Reject the request with 400.
    Strict,
}

/// An in-memory Products and Users catalog served over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog", version, max_term_width = 100)]
pub struct Config {
    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Identifier scheme for products.
    #[arg(long, value_enum, default_value_t = IdScheme::Random)]
    pub product_ids: IdScheme,

    /// Identifier scheme for users.
    #[arg(long, value_enum, default_value_t = IdScheme::Random)]
    pub user_ids: IdScheme,

    /// Identifier comparison for products.
    #[arg(long, value_enum, default_value_t = Lookup::Exact)]
    pub product_lookup: Lookup,

    /// Identifier comparison for users.
    #[arg(long, value_enum, default_value_t = Lookup::Exact)]
    pub user_lookup: Lookup,

    /// Handling of non-numeric input in numeric fields.
    #[arg(long, value_enum, default_value_t = Numbers::Lenient)]
    pub numbers: Numbers,

    /// Response to a successful delete.
    #[arg(long, value_enum, default_value_t = DeleteStyle::NoContent)]
    pub delete_style: DeleteStyle,

    /// Length of random identifier tokens.
    #[arg(
        long,
        default_value_t = 6,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=64)
    )]
    pub token_length: usize,

    /// Capacity of each store actor's request channel.
    #[arg(
        long,
        default_value_t = 32,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=65536)
    )]
    pub channel_capacity: usize,

    /// Start with empty stores instead of the seed data.
    #[arg(long)]
    pub no_seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["catalog"])
    }
}

impl Config {
    fn options(&self, ids: IdScheme, lookup: Lookup) -> StoreOptions {
        StoreOptions {
            ids: match ids {
                IdScheme::Timestamp => IdStrategy::Timestamp,
                IdScheme::Random => IdStrategy::RandomToken {
                    len: self.token_length,
                },
                IdScheme::Sequential => IdStrategy::Sequential { start: 1 },
            },
            id_match: match lookup {
                Lookup::Exact => IdMatch::Exact,
                Lookup::Coercing => IdMatch::Coercing,
            },
            coercion: match self.numbers {
                Numbers::Lenient => Coercion::Lenient,
                Numbers::Strict => Coercion::Strict,
            },
        }
    }

    pub fn product_options(&self) -> StoreOptions {
        self.options(self.product_ids, self.product_lookup)
    }

    pub fn user_options(&self) -> StoreOptions {
        self.options(self.user_ids, self.user_lookup)
    }

    pub fn seed(&self) -> bool {
        !self.no_seed
    }
}

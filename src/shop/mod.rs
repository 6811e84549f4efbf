pub mod assembler;
pub mod config;

pub use assembler::{PricedItem, Shop, ShopAssembler};
pub use config::{GenConfig, WeightedCount};

/// Requested shop footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopSize {
    Small,
    Medium,
    Large,
}

impl ShopSize {
    /// Fixed order used when resolving a random size request.
    pub const ALL: [ShopSize; 3] = [ShopSize::Small, ShopSize::Medium, ShopSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShopSize::Small => "S",
            ShopSize::Medium => "M",
            ShopSize::Large => "L",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "S" => Some(ShopSize::Small),
            "M" => Some(ShopSize::Medium),
            "L" => Some(ShopSize::Large),
            _ => None,
        }
    }
}

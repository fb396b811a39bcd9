/// The four price-display modes a product card can take.
///
/// Selected by the 2x2 combination of range/single and sale/regular,
/// decided over normalized numeric values. What the shopper actually sees
/// is always the original pre-formatted field strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceVariant {
    RangeOnSale,
    RangeRegular,
    SingleOnSale,
    SingleRegular,
}

impl PriceVariant {
    pub fn is_range(self) -> bool {
        matches!(self, PriceVariant::RangeOnSale | PriceVariant::RangeRegular)
    }

    pub fn is_on_sale(self) -> bool {
        matches!(self, PriceVariant::RangeOnSale | PriceVariant::SingleOnSale)
    }
}

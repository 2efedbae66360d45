use super::wire::cell_to_string;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Number of positional cells in an order row on the wire.
pub const ORDER_ROW_CELLS: usize = 10;

/// One line of the kitchen order list.
///
/// The remote sheet sends each order as a bare array where only the cell
/// *position* carries meaning:
///
/// | # | field |
/// |---|-------|
/// | 0 | order number |
/// | 1 | customer name |
/// | 2 | phone |
/// | 3 | address |
/// | 4 | meal type |
/// | 5 | food preference |
/// | 6 | meal size |
/// | 7 | plan type |
/// | 8 | payment status |
/// | 9 | notes (optional) |
///
/// Decoding happens here and nowhere else; the rest of the crate only sees
/// named fields. Serialization writes the same positional array back, so a
/// saved result can be loaded again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRow {
    pub order_number: String,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub meal_type: String,
    pub food_preference: String,
    pub meal_size: String,
    pub plan_type: String,
    pub payment_status: String,
    pub notes: String,
}

impl OrderRow {
    /// Decode a positional row. Missing cells (typically the trailing notes)
    /// are empty; cells past the tenth are ignored.
    pub fn from_cells(cells: &[Value]) -> Self {
        let cell = |i: usize| cells.get(i).map(cell_to_string).unwrap_or_default();

        Self {
            order_number: cell(0),
            customer_name: cell(1),
            phone: cell(2),
            address: cell(3),
            meal_type: cell(4),
            food_preference: cell(5),
            meal_size: cell(6),
            plan_type: cell(7),
            payment_status: cell(8),
            notes: cell(9),
        }
    }

    /// Fields in wire order.
    pub fn cells(&self) -> [&str; ORDER_ROW_CELLS] {
        [
            self.order_number.as_str(),
            self.customer_name.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
            self.meal_type.as_str(),
            self.food_preference.as_str(),
            self.meal_size.as_str(),
            self.plan_type.as_str(),
            self.payment_status.as_str(),
            self.notes.as_str(),
        ]
    }
}

impl<'de> Deserialize<'de> for OrderRow {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells = Vec::<Value>::deserialize(d)?;
        Ok(Self::from_cells(&cells))
    }
}

impl Serialize for OrderRow {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.cells().serialize(s)
    }
}

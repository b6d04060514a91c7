use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supply state of a material line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum MaterialStatus {
    #[serde(rename = "Đủ hàng")]
    #[strum(serialize = "Đủ hàng")]
    InStock,
    #[serde(rename = "Đang đặt")]
    #[strum(serialize = "Đang đặt")]
    OnOrder,
    #[serde(rename = "Hết hàng")]
    #[strum(serialize = "Hết hàng")]
    OutOfStock,
    #[serde(rename = "Đã sử dụng")]
    #[strum(serialize = "Đã sử dụng")]
    Consumed,
}

/// A material line item on a project's bill of quantities.
///
/// Status is user-set, with one exception applied by the entity store: an
/// `OnOrder` material whose `actual_quantity` reaches `planned_quantity`
/// is promoted to `InStock`. No other transition happens automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub project_id: String,
    pub name: String,
    /// Unit of measure, e.g. "Cái", "Mét", "Bộ".
    pub unit: String,
    pub planned_quantity: u32,
    pub actual_quantity: u32,
    pub status: MaterialStatus,
}

impl Material {
    /// Re-evaluates the one documented auto-transition after a quantity edit.
    ///
    /// Callers outside the store never need to invoke this; the material
    /// collection applies it as part of its update contract.
    pub(crate) fn apply_supply_promotion(&mut self) {
        if self.status == MaterialStatus::OnOrder && self.actual_quantity >= self.planned_quantity {
            self.status = MaterialStatus::InStock;
        }
    }
}

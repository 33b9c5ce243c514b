use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub artisan: String,
}

impl Product {
    pub fn price_label(&self) -> String {
        if self.price.fract() == 0.0 {
            return format!("₹{}", self.price as u64);
        }

        return format!("₹{:.2}", self.price);
    }
}

use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};

/// JSON body accepted when creating or replacing a product.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = 255))]
    pub product_name: String,
    // No lower bound: the price contract only requires a float.
    pub price: f64,
}

impl ProductForm {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            product_name: self.product_name,
            price: self.price,
        }
    }

    pub fn into_update_product(self) -> UpdateProduct {
        UpdateProduct {
            product_name: self.product_name,
            price: self.price,
        }
    }
}

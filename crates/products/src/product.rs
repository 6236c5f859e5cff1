use rust_decimal::Decimal;
use serde::Deserialize;

use fairway_core::ProductReference;

use crate::category::{Category, GloveSize};
use crate::wire;

/// A catalog product as served by the backend (read-only).
///
/// Decoding never fails on individual fields: blank strings, `null`s and
/// malformed numbers all read as "absent". A row that is not an object, or
/// repeats a key under its alias, still fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ProductRecord")]
pub struct Product {
    reference: Option<ProductReference>,
    name: Option<String>,
    brand: Option<String>,
    model: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    images: ProductImages,
    specs: ProductSpecs,
}

/// Image references attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductImages {
    pub main: Option<String>,
    pub front: Option<String>,
    pub top: Option<String>,
    pub side: Option<String>,
}

/// Category-specific attributes. Exactly one group applies per product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSpecs {
    Clubs(ClubSpecs),
    Gloves(GloveStock),
    Balls(BallSpecs),
    Unknown(String),
}

/// Spec value kept in the textual form the backend sent it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecValue(String);

impl SpecValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SpecValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubSpecs {
    pub length: Option<SpecValue>,
    pub loft: Option<SpecValue>,
    pub lie: Option<SpecValue>,
    pub weight: Option<SpecValue>,
    pub swingweight: Option<SpecValue>,
    pub flex: Option<SpecValue>,
}

/// Units in stock per glove size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GloveStock {
    pub s: u32,
    pub m: u32,
    pub l: u32,
    pub xl: u32,
    pub xxl: u32,
}

impl GloveStock {
    pub fn units(&self, size: GloveSize) -> u32 {
        match size {
            GloveSize::S => self.s,
            GloveSize::M => self.m,
            GloveSize::L => self.l,
            GloveSize::XL => self.xl,
            GloveSize::XXL => self.xxl,
        }
    }

    pub fn is_available(&self, size: GloveSize) -> bool {
        self.units(size) > 0
    }

    /// Sizes with stock, in display order.
    pub fn available_sizes(&self) -> Vec<GloveSize> {
        GloveSize::ALL
            .into_iter()
            .filter(|size| self.is_available(*size))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallSpecs {
    pub units_per_package: Option<u32>,
}

impl ProductSpecs {
    pub fn category(&self) -> Category {
        match self {
            ProductSpecs::Clubs(_) => Category::Clubs,
            ProductSpecs::Gloves(_) => Category::Gloves,
            ProductSpecs::Balls(_) => Category::Balls,
            ProductSpecs::Unknown(tag) => Category::Unknown(tag.clone()),
        }
    }
}

impl Product {
    pub fn reference(&self) -> Option<&ProductReference> {
        self.reference.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn images(&self) -> &ProductImages {
        &self.images
    }

    pub fn specs(&self) -> &ProductSpecs {
        &self.specs
    }

    pub fn category(&self) -> Category {
        self.specs.category()
    }

    /// Glove stock, if this is a glove.
    pub fn glove_stock(&self) -> Option<&GloveStock> {
        match &self.specs {
            ProductSpecs::Gloves(stock) => Some(stock),
            _ => None,
        }
    }
}

/// Flat wire shape of a product row.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(default, alias = "reference", deserialize_with = "wire::text")]
    referencia: Option<String>,
    #[serde(default, alias = "name", deserialize_with = "wire::text")]
    nombre: Option<String>,
    #[serde(default, alias = "brand", deserialize_with = "wire::text")]
    marca: Option<String>,
    #[serde(default, alias = "model", deserialize_with = "wire::text")]
    modelo: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "wire::text")]
    descripcion: Option<String>,
    #[serde(default, alias = "category", deserialize_with = "wire::text")]
    categoria: Option<String>,
    #[serde(default, alias = "price", deserialize_with = "wire::amount")]
    precio: Option<Decimal>,

    #[serde(default, alias = "image_main", deserialize_with = "wire::text")]
    imagen_principal: Option<String>,
    #[serde(default, alias = "image_front", deserialize_with = "wire::text")]
    imagen_frontal: Option<String>,
    #[serde(default, alias = "image_top", deserialize_with = "wire::text")]
    imagen_superior: Option<String>,
    #[serde(default, alias = "image_side", deserialize_with = "wire::text")]
    imagen_lateral: Option<String>,

    #[serde(default, alias = "length", deserialize_with = "wire::text")]
    longitud: Option<String>,
    #[serde(default, deserialize_with = "wire::text")]
    loft: Option<String>,
    #[serde(default, deserialize_with = "wire::text")]
    lie: Option<String>,
    #[serde(default, alias = "weight", deserialize_with = "wire::text")]
    peso: Option<String>,
    #[serde(default, deserialize_with = "wire::text")]
    swingweight: Option<String>,
    #[serde(default, deserialize_with = "wire::text")]
    flex: Option<String>,

    #[serde(default, deserialize_with = "wire::stock")]
    stock_s: u32,
    #[serde(default, deserialize_with = "wire::stock")]
    stock_m: u32,
    #[serde(default, deserialize_with = "wire::stock")]
    stock_l: u32,
    #[serde(default, deserialize_with = "wire::stock")]
    stock_xl: u32,
    #[serde(default, deserialize_with = "wire::stock")]
    stock_xxl: u32,

    #[serde(default, alias = "units_per_package", deserialize_with = "wire::count")]
    unidades_paquete: Option<u32>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let category = Category::from_tag(record.categoria.as_deref().unwrap_or_default());
        let specs = match category {
            Category::Clubs => ProductSpecs::Clubs(ClubSpecs {
                length: record.longitud.map(SpecValue),
                loft: record.loft.map(SpecValue),
                lie: record.lie.map(SpecValue),
                weight: record.peso.map(SpecValue),
                swingweight: record.swingweight.map(SpecValue),
                flex: record.flex.map(SpecValue),
            }),
            Category::Gloves => ProductSpecs::Gloves(GloveStock {
                s: record.stock_s,
                m: record.stock_m,
                l: record.stock_l,
                xl: record.stock_xl,
                xxl: record.stock_xxl,
            }),
            Category::Balls => ProductSpecs::Balls(BallSpecs {
                units_per_package: record.unidades_paquete,
            }),
            Category::Unknown(tag) => ProductSpecs::Unknown(tag),
        };

        // Text already went through the lenient decoder, so a reference that
        // fails validation can only be blank, which means "none".
        let reference = record
            .referencia
            .and_then(|raw| ProductReference::new(raw).ok());

        Self {
            reference,
            name: record.nombre,
            brand: record.marca,
            model: record.modelo,
            description: record.descripcion,
            price: record.precio,
            images: ProductImages {
                main: record.imagen_principal,
                front: record.imagen_frontal,
                top: record.imagen_superior,
                side: record.imagen_lateral,
            },
            specs,
        }
    }
}

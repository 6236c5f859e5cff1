//! Category spec renderer: the per-category attribute panel of the detail view.

use fairway_core::DomainError;
use fairway_products::{BallSpecs, ClubSpecs, GloveSize, GloveStock, ProductSpecs, SpecValue};

/// Hint shown under the glove size tags before anything is picked.
pub const SIZE_HINT_PROMPT: &str = "Selecciona una talla";
/// Inline error shown when adding a glove without a size.
pub const SIZE_HINT_REQUIRED: &str = "Por favor selecciona una talla";

/// One labelled row of the clubs panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// One glove size tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeTag {
    pub size: GloveSize,
    pub available: bool,
    pub selected: bool,
}

/// Text under the size tags, with or without error styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeHint {
    pub text: String,
    pub is_error: bool,
}

impl SizeHint {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// What the detail view shows in its spec area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecPanel {
    Clubs(Vec<SpecRow>),
    Gloves { tags: Vec<SizeTag>, hint: SizeHint },
    Balls { units_per_package: String },
}

/// Build the spec panel for a product, together with the size picker state
/// for gloves. Unknown categories get no panel at all.
pub fn render_specs(specs: &ProductSpecs) -> (Option<SpecPanel>, Option<GloveSizePicker>) {
    match specs {
        ProductSpecs::Clubs(clubs) => (Some(SpecPanel::Clubs(club_rows(clubs))), None),
        ProductSpecs::Gloves(stock) => {
            let picker = GloveSizePicker::new(*stock);
            (Some(picker.panel()), Some(picker))
        }
        ProductSpecs::Balls(balls) => (Some(ball_panel(balls)), None),
        ProductSpecs::Unknown(_) => (None, None),
    }
}

fn club_rows(specs: &ClubSpecs) -> Vec<SpecRow> {
    let fields: [(&'static str, &Option<SpecValue>, &str); 6] = [
        ("Longitud", &specs.length, "\""),
        ("Loft", &specs.loft, "°"),
        ("Lie", &specs.lie, "°"),
        ("Peso", &specs.weight, " g"),
        ("Swingweight", &specs.swingweight, ""),
        ("Flex", &specs.flex, ""),
    ];

    fields
        .into_iter()
        .filter_map(|(label, value, unit)| {
            value.as_ref().map(|value| SpecRow {
                label,
                value: format!("{value}{unit}"),
            })
        })
        .collect()
}

fn ball_panel(specs: &BallSpecs) -> SpecPanel {
    SpecPanel::Balls {
        units_per_package: specs
            .units_per_package
            .map(|units| units.to_string())
            .unwrap_or_else(|| "-".to_string()),
    }
}

/// Glove size selection for one detail-view session.
///
/// At most one size is selected, and only sizes with stock can be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GloveSizePicker {
    stock: GloveStock,
    selected: Option<GloveSize>,
    hint: SizeHint,
}

impl GloveSizePicker {
    pub fn new(stock: GloveStock) -> Self {
        Self {
            stock,
            selected: None,
            hint: SizeHint::info(SIZE_HINT_PROMPT),
        }
    }

    pub fn selected(&self) -> Option<GloveSize> {
        self.selected
    }

    pub fn hint(&self) -> &SizeHint {
        &self.hint
    }

    /// Select `size`. Sizes without stock are inert: nothing changes and
    /// `false` is returned.
    pub fn select(&mut self, size: GloveSize) -> bool {
        if !self.stock.is_available(size) {
            return false;
        }
        self.selected = Some(size);
        self.hint = SizeHint::info(format!("Talla {size} seleccionada"));
        true
    }

    /// The selected size, or flag the hint as an error when there is none.
    pub fn require_selection(&mut self) -> Result<GloveSize, DomainError> {
        match self.selected {
            Some(size) => Ok(size),
            None => {
                self.hint = SizeHint::error(SIZE_HINT_REQUIRED);
                Err(DomainError::SizeRequired)
            }
        }
    }

    pub fn tags(&self) -> Vec<SizeTag> {
        GloveSize::ALL
            .into_iter()
            .map(|size| SizeTag {
                size,
                available: self.stock.is_available(size),
                selected: self.selected == Some(size),
            })
            .collect()
    }

    pub fn panel(&self) -> SpecPanel {
        SpecPanel::Gloves {
            tags: self.tags(),
            hint: self.hint.clone(),
        }
    }
}

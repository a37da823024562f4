use std::fmt::{Display, Formatter};

/// Discriminator of a dialog. Built-in kinds form a closed set; any other
/// string is carried through as `Custom`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DialogType {
    Ok,
    YesNo,
    Text,
    Image,
    FreeInput,
    Inventory,
    DualInventory,
    CraftingGui,
    Keypad,
    ProgressBar,
    Custom(String),
}

impl DialogType {
    pub fn name(&self) -> &str {
        match self {
            DialogType::Ok => "OK",
            DialogType::YesNo => "YES_NO",
            DialogType::Text => "TEXT",
            DialogType::Image => "IMAGE",
            DialogType::FreeInput => "FREE_INPUT",
            DialogType::Inventory => "INVENTORY",
            DialogType::DualInventory => "DUAL_INVENTORY",
            DialogType::CraftingGui => "CRAFTING_GUI",
            DialogType::Keypad => "KEYPAD",
            DialogType::ProgressBar => "PROGRESS_BAR",
            DialogType::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "OK" => DialogType::Ok,
            "YES_NO" => DialogType::YesNo,
            "TEXT" => DialogType::Text,
            "IMAGE" => DialogType::Image,
            "FREE_INPUT" => DialogType::FreeInput,
            "INVENTORY" => DialogType::Inventory,
            "DUAL_INVENTORY" => DialogType::DualInventory,
            "CRAFTING_GUI" => DialogType::CraftingGui,
            "KEYPAD" => DialogType::Keypad,
            "PROGRESS_BAR" => DialogType::ProgressBar,
            other => DialogType::Custom(other.to_string()),
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, DialogType::Custom(_))
    }
}

impl Display for DialogType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

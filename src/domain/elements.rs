//! Material definitions
//!
//! A cell stores its material as the color it is drawn with, so the grid is
//! directly presentable. Colors are laid out ABGR in memory
//! (`0xAABBGGRR`), which is what a little-endian `ImageData` buffer wants.
//!
//! To add a material: add the variant to `Material`, a row in
//! `MATERIAL_DATA`, an `EL_*` constant, and a routine in the matching `systems::behaviors`
//! category.

use serde::Serialize;

/// Cell value / material identifier
pub type MaterialId = u32;

/// Packs an RGB triple into an opaque ABGR cell value.
pub const fn in_game_color(r: u8, g: u8, b: u8) -> MaterialId {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

pub const EL_BACKGROUND: MaterialId = in_game_color(0, 0, 0);
pub const EL_WALL: MaterialId = in_game_color(127, 127, 127);
pub const EL_SAND: MaterialId = in_game_color(223, 193, 99);
pub const EL_WATER: MaterialId = in_game_color(35, 70, 180);
pub const EL_FIRE: MaterialId = in_game_color(180, 5, 20);
pub const EL_FUSE: MaterialId = in_game_color(90, 90, 90);
pub const EL_VINE: MaterialId = in_game_color(20, 160, 0);
pub const EL_STEAM: MaterialId = in_game_color(220, 220, 240);
pub const EL_SALT: MaterialId = in_game_color(230, 220, 220);
pub const EL_SALT_WATER: MaterialId = in_game_color(130, 145, 200);
pub const EL_OIL: MaterialId = in_game_color(90, 45, 45);
pub const EL_SOIL: MaterialId = in_game_color(115, 75, 50);
pub const EL_MUD: MaterialId = in_game_color(75, 50, 25);
pub const EL_LAVA: MaterialId = in_game_color(200, 30, 5);
pub const EL_C4: MaterialId = in_game_color(185, 185, 150);
pub const EL_METHANE: MaterialId = in_game_color(70, 70, 50);
pub const EL_PUMICE: MaterialId = in_game_color(170, 165, 165);
pub const EL_GLASS: MaterialId = in_game_color(230, 230, 250);
pub const EL_ACID: MaterialId = in_game_color(60, 171, 72);
pub const EL_PRODUCER: MaterialId = in_game_color(50, 115, 175);
pub const EL_ICE: MaterialId = in_game_color(100, 150, 200);
pub const EL_SEED: MaterialId = in_game_color(150, 150, 75);
pub const EL_LEAF: MaterialId = in_game_color(58, 95, 11);
pub const EL_BRANCH: MaterialId = in_game_color(85, 65, 35);

/// One variant per registered material; selects the rule routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Material {
    Background,
    Wall,
    Sand,
    Water,
    Fire,
    Fuse,
    Vine,
    Steam,
    Salt,
    SaltWater,
    Oil,
    Soil,
    Mud,
    Lava,
    C4,
    Methane,
    Pumice,
    Glass,
    Acid,
    Producer,
    Ice,
    Seed,
    Leaf,
    Branch,
}

pub const MATERIAL_COUNT: usize = 24;

/// Behavior family; selects which behavior handles the material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No routine: never changes on its own
    Inert,
    Powder,
    Liquid,
    Gas,
    Energy,
    Growth,
    Utility,
}

/// Static description of a material
#[derive(Clone, Copy, Debug)]
pub struct MaterialDef {
    pub material: Material,
    pub name: &'static str,
    pub color: MaterialId,
    pub category: Category,
    /// Gases (steam, methane) may diffuse through this material.
    pub gas_permeable: bool,
}

const fn def(
    material: Material,
    name: &'static str,
    color: MaterialId,
    category: Category,
    gas_permeable: bool,
) -> MaterialDef {
    MaterialDef { material, name, color, category, gas_permeable }
}

pub const MATERIAL_DATA: [MaterialDef; MATERIAL_COUNT] = [
    def(Material::Background, "BACKGROUND", EL_BACKGROUND, Category::Inert, false),
    def(Material::Wall, "WALL", EL_WALL, Category::Inert, false),
    def(Material::Sand, "SAND", EL_SAND, Category::Powder, true),
    def(Material::Water, "WATER", EL_WATER, Category::Liquid, true),
    def(Material::Fire, "FIRE", EL_FIRE, Category::Energy, true),
    def(Material::Fuse, "FUSE", EL_FUSE, Category::Inert, false),
    def(Material::Vine, "VINE", EL_VINE, Category::Growth, false),
    def(Material::Steam, "STEAM", EL_STEAM, Category::Gas, false),
    def(Material::Salt, "SALT", EL_SALT, Category::Powder, false),
    def(Material::SaltWater, "SALT_WATER", EL_SALT_WATER, Category::Liquid, false),
    def(Material::Oil, "OIL", EL_OIL, Category::Liquid, false),
    def(Material::Soil, "SOIL", EL_SOIL, Category::Powder, false),
    def(Material::Mud, "MUD", EL_MUD, Category::Powder, false),
    def(Material::Lava, "LAVA", EL_LAVA, Category::Liquid, true),
    def(Material::C4, "C4", EL_C4, Category::Energy, false),
    def(Material::Methane, "METHANE", EL_METHANE, Category::Gas, false),
    def(Material::Pumice, "PUMICE", EL_PUMICE, Category::Powder, true),
    def(Material::Glass, "GLASS", EL_GLASS, Category::Inert, false),
    def(Material::Acid, "ACID", EL_ACID, Category::Liquid, false),
    def(Material::Producer, "PRODUCER", EL_PRODUCER, Category::Utility, false),
    def(Material::Ice, "ICE", EL_ICE, Category::Growth, false),
    def(Material::Seed, "SEED", EL_SEED, Category::Growth, true),
    def(Material::Leaf, "LEAF", EL_LEAF, Category::Inert, false),
    def(Material::Branch, "BRANCH", EL_BRANCH, Category::Inert, false),
];

impl Material {
    #[inline]
    pub fn def(self) -> &'static MaterialDef {
        &MATERIAL_DATA[self as usize]
    }

    #[inline]
    pub fn id(self) -> MaterialId {
        self.def().color
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    #[inline]
    pub fn category(self) -> Category {
        self.def().category
    }
}

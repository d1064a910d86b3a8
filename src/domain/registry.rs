//! Material registry
//!
//! Built once from a definition table and frozen: there is no API to add or
//! change materials afterwards. Duplicate cell values abort the build.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::error::{EngineError, EngineResult};
use crate::elements::{Category, Material, MaterialDef, MaterialId, MATERIAL_DATA};

#[derive(Clone)]
pub struct MaterialRegistry {
    defs: Vec<MaterialDef>,
    by_id: HashMap<MaterialId, Material>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    name: &'a str,
    material: Material,
    id: MaterialId,
    color: String,
    category: Category,
    gas_permeable: bool,
}

#[derive(Serialize)]
struct Manifest<'a> {
    format_version: u32,
    materials: Vec<ManifestEntry<'a>>,
}

impl MaterialRegistry {
    /// Registry of the built-in material set
    pub fn standard() -> EngineResult<Self> {
        Self::build(&MATERIAL_DATA)
    }

    pub fn build(defs: &[MaterialDef]) -> EngineResult<Self> {
        let mut by_id: HashMap<MaterialId, Material> = HashMap::with_capacity(defs.len());
        for def in defs {
            if let Some(existing) = by_id.get(&def.color) {
                let err = EngineError::DuplicateMaterialId {
                    name: def.name,
                    existing: existing.name(),
                    id: def.color,
                };
                tracing::error!(%err, "material registry rejected");
                return Err(err);
            }
            by_id.insert(def.color, def.material);
        }
        tracing::debug!(materials = defs.len(), "material registry frozen");
        Ok(Self { defs: defs.to_vec(), by_id })
    }

    #[inline]
    pub fn resolve(&self, id: MaterialId) -> Option<Material> {
        self.by_id.get(&id).copied()
    }

    #[inline]
    pub fn is_registered(&self, id: MaterialId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Unknown values are treated as impermeable.
    #[inline]
    pub fn gas_permeable(&self, id: MaterialId) -> bool {
        match self.resolve(id) {
            Some(material) => material.def().gas_permeable,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn defs(&self) -> &[MaterialDef] {
        &self.defs
    }

    pub fn id_by_name(&self, name: &str) -> Option<MaterialId> {
        self.defs
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| d.color)
    }

    /// JSON listing for the menu collaborator
    pub fn manifest_json(&self) -> EngineResult<String> {
        let manifest = Manifest {
            format_version: 1,
            materials: self
                .defs
                .iter()
                .map(|d| ManifestEntry {
                    name: d.name,
                    material: d.material,
                    id: d.color,
                    color: format!(
                        "#{:02x}{:02x}{:02x}",
                        d.color & 0xFF,
                        (d.color >> 8) & 0xFF,
                        (d.color >> 16) & 0xFF
                    ),
                    category: d.category,
                    gas_permeable: d.gas_permeable,
                })
                .collect(),
        };
        serde_json::to_string(&manifest).map_err(EngineError::Manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{EL_SAND, EL_STEAM, EL_WALL, MATERIAL_COUNT};

    #[test]
    fn standard_registry_resolves_every_material() {
        let registry = MaterialRegistry::standard().unwrap();
        assert_eq!(registry.len(), MATERIAL_COUNT);
        for def in MATERIAL_DATA.iter() {
            assert_eq!(registry.resolve(def.color), Some(def.material));
        }
        assert_eq!(registry.resolve(0x1234_5678), None);
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let mut defs = MATERIAL_DATA.to_vec();
        defs[3].color = EL_SAND;
        let err = MaterialRegistry::build(&defs).err().expect("duplicate must fail");
        assert!(matches!(err, EngineError::DuplicateMaterialId { id, .. } if id == EL_SAND));
        assert!(err.to_string().starts_with("duplicate color"));
    }

    #[test]
    fn gas_permeability_follows_table() {
        let registry = MaterialRegistry::standard().unwrap();
        assert!(registry.gas_permeable(EL_SAND));
        assert!(!registry.gas_permeable(EL_WALL));
        assert!(!registry.gas_permeable(EL_STEAM));
        assert!(!registry.gas_permeable(0xDEAD_BEEF));
    }

    #[test]
    fn manifest_lists_materials_in_table_order() {
        let registry = MaterialRegistry::standard().unwrap();
        let json: serde_json::Value = serde_json::from_str(&registry.manifest_json().unwrap()).unwrap();
        assert_eq!(json["format_version"], 1);
        let materials = json["materials"].as_array().unwrap();
        assert_eq!(materials.len(), MATERIAL_COUNT);
        assert!(materials.iter().all(|m| m["id"].is_u64() && m["category"].is_string()));
        assert_eq!(materials[2]["name"], "SAND");
        assert_eq!(materials[2]["material"], "SAND");
        assert_eq!(materials[2]["color"], "#dfc163");
        assert_eq!(registry.id_by_name("salt_water"), Some(crate::elements::EL_SALT_WATER));
    }
}

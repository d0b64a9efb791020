//! # Conformational Template Libraries
//!
//! This module manages collections of rigid nucleotide templates: the
//! built-in idealized library compiled into the crate, and external template
//! sets loaded from TOML files.
//!
//! ## Overview
//!
//! A template library is an ordered, name-addressed collection of
//! [`NucleotideTemplate`]s. For each of the four base kinds the built-in
//! library carries one standard conformation, named by the one-letter base
//! code, and three alternative backbone conformers named with numeric
//! suffixes (`A01` through `A03`). Problems resolve the templates they need
//! by name or by kind at setup time, so a library with different contents
//! transparently changes what the search explores.
//!
//! ## Key Components
//!
//! - [`TemplateLibrary`] - Ordered lookup of shared templates by name or kind
//! - [`loader`] - The TOML template-set reader with full schema validation

mod data;
pub mod loader;

use std::sync::{Arc, LazyLock};

use crate::core::models::base::BaseKind;
use crate::core::models::template::NucleotideTemplate;

/// An ordered collection of nucleotide templates addressed by name.
///
/// Template names are expected to be unique; lookups return the first match
/// in insertion order. Conformer enumeration preserves insertion order as
/// well, which is what makes search results reproducible run to run.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<Arc<NucleotideTemplate>>,
}

static BUILTIN: LazyLock<TemplateLibrary> =
    LazyLock::new(|| TemplateLibrary::from_templates(data::builtin_templates()));

impl TemplateLibrary {
    /// The built-in idealized library: one standard template plus three
    /// conformers for each of the four base kinds.
    pub fn builtin() -> &'static TemplateLibrary {
        &BUILTIN
    }

    /// Wraps a list of templates into a library, preserving order.
    pub fn from_templates(templates: Vec<NucleotideTemplate>) -> Self {
        Self {
            templates: templates.into_iter().map(Arc::new).collect(),
        }
    }

    /// Looks a template up by its library name.
    pub fn get(&self, name: &str) -> Option<&Arc<NucleotideTemplate>> {
        self.templates.iter().find(|t| t.name() == name)
    }

    /// The standard conformation for a base kind, named by its one-letter
    /// code.
    pub fn standard(&self, kind: BaseKind) -> Option<&Arc<NucleotideTemplate>> {
        self.get(kind.code())
    }

    /// Every alternative conformer of a base kind, in library order. The
    /// standard template is not included.
    pub fn conformers(&self, kind: BaseKind) -> Vec<Arc<NucleotideTemplate>> {
        self.templates
            .iter()
            .filter(|t| t.kind() == kind && t.name() != kind.code())
            .cloned()
            .collect()
    }

    /// Iterates over all templates in library order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<NucleotideTemplate>> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;
    use std::collections::HashSet;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn builtin_library_has_sixteen_uniquely_named_templates() {
        let library = TemplateLibrary::builtin();
        assert_eq!(library.len(), 16);

        let names: HashSet<&str> = library.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn standard_templates_exist_for_every_kind() {
        let library = TemplateLibrary::builtin();
        for kind in [
            BaseKind::Adenine,
            BaseKind::Cytosine,
            BaseKind::Guanine,
            BaseKind::Uracil,
        ] {
            let standard = library.standard(kind).expect("standard template");
            assert_eq!(standard.name(), kind.code());
            assert_eq!(standard.kind(), kind);
        }
    }

    #[test]
    fn conformers_are_ordered_and_exclude_the_standard() {
        let library = TemplateLibrary::builtin();
        let conformers = library.conformers(BaseKind::Cytosine);
        let names: Vec<&str> = conformers.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["C01", "C02", "C03"]);
        assert!(conformers.iter().all(|t| t.kind() == BaseKind::Cytosine));
    }

    #[test]
    fn unknown_names_return_none() {
        assert!(TemplateLibrary::builtin().get("A04").is_none());
        assert!(TemplateLibrary::builtin().get("T").is_none());
    }

    #[test]
    fn base_frame_transforms_canonicalize_their_own_anchors() {
        for template in TemplateLibrary::builtin().iter() {
            let (origin, glyco, ring) = template.base_frame_anchors();
            let tfo = template.base_frame_tfo();

            let q1 = tfo.apply(&origin);
            assert!(q1.coords.norm() < TOLERANCE, "{}: C1'", template.name());

            let q2 = tfo.apply(&glyco);
            assert!(q2.x.abs() < TOLERANCE, "{}: N x", template.name());
            assert!(q2.z.abs() < TOLERANCE, "{}: N z", template.name());
            assert!(q2.y > 0.0, "{}: N on +Y", template.name());

            let q3 = tfo.apply(&ring);
            assert!(q3.x.abs() < TOLERANCE, "{}: ring x", template.name());
            assert!(q3.z > 0.0, "{}: ring z", template.name());
        }
    }

    #[test]
    fn glycosidic_bond_length_is_idealized() {
        for template in TemplateLibrary::builtin().iter() {
            let (_, glyco, _) = template.base_frame_anchors();
            let canonical = template.base_frame_tfo().apply(&glyco);
            // Stored coordinates are rounded, so allow for the rounding.
            assert!(
                (canonical.y - 1.48).abs() < 1e-3,
                "{}: glycosidic length {}",
                template.name(),
                canonical.y
            );
        }
    }

    #[test]
    fn backbone_rotamers_are_orthonormal_and_distinct() {
        for template in TemplateLibrary::builtin().iter() {
            let rotamers = template.po3_rotamers();
            for rotamer in rotamers {
                let residual = rotamer.linear() * rotamer.linear().transpose()
                    - Matrix3::<f64>::identity();
                assert!(residual.abs().max() < TOLERANCE, "{}", template.name());
            }
            for i in 0..rotamers.len() {
                for j in (i + 1)..rotamers.len() {
                    assert_ne!(rotamers[i], rotamers[j], "{}", template.name());
                }
            }
        }
    }

    #[test]
    fn builtin_library_is_shared() {
        let a = TemplateLibrary::builtin().get("A").unwrap();
        let b = TemplateLibrary::builtin().get("A").unwrap();
        assert!(Arc::ptr_eq(a, b));
    }
}

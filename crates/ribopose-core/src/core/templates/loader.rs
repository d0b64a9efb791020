//! Loading template sets from TOML files.
//!
//! A template set file carries an array of `[[templates]]` tables, each with
//! a name, a base kind, the four alignment transforms as flat twelve-element
//! arrays, and a table of atom coordinates keyed by PDB-style atom name. The
//! loader validates the file completely before any template is handed out:
//! every required atom must be present, no atom may be foreign to the
//! declared base kind, and names must be unique.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use nalgebra::Point3;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::TemplateLibrary;
use crate::core::geometry::Transform;
use crate::core::models::atom::AtomName;
use crate::core::models::base::BaseKind;
use crate::core::models::template::{
    AdenineAtoms, BasePayload, CommonAtoms, CytosineAtoms, GuanineAtoms, NucleotideTemplate,
    UracilAtoms,
};

/// Errors that can occur while loading a template set.
#[derive(Debug, Error)]
pub enum TemplateSetError {
    #[error("failed to read template set file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template set file '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("template '{template}' declares unknown base kind '{value}'")]
    UnknownBaseKind { template: String, value: String },

    #[error("template '{template}' lists unknown atom name '{atom}'")]
    UnknownAtom { template: String, atom: String },

    #[error("template '{template}' is missing required atom {atom}")]
    MissingAtom { template: String, atom: AtomName },

    #[error("template '{template}' lists atom {atom}, which its base kind cannot carry")]
    ForeignAtom { template: String, atom: AtomName },

    #[error("duplicate template name '{name}'")]
    DuplicateName { name: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTemplateSet {
    templates: Vec<RawTemplate>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawTemplate {
    name: String,
    base_kind: String,
    transforms: RawTransforms,
    atoms: HashMap<String, [f64; 3]>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawTransforms {
    base_frame: [f64; 12],
    po3_60: [f64; 12],
    po3_180: [f64; 12],
    po3_275: [f64; 12],
}

impl TemplateLibrary {
    /// Loads a template set from a TOML file.
    ///
    /// The resulting library fully replaces the built-in one for whichever
    /// problem it is handed to; nothing is merged.
    pub fn load(path: &Path) -> Result<Self, TemplateSetError> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| TemplateSetError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let raw: RawTemplateSet = toml::from_str(&content).map_err(|e| TemplateSetError::Toml {
            path: path_str.clone(),
            source: e,
        })?;

        let mut templates = Vec::with_capacity(raw.templates.len());
        let mut seen = HashSet::new();
        for raw_template in raw.templates {
            if !seen.insert(raw_template.name.clone()) {
                return Err(TemplateSetError::DuplicateName {
                    name: raw_template.name,
                });
            }
            templates.push(convert_template(raw_template)?);
        }

        info!(
            path = %path_str,
            count = templates.len(),
            "Loaded template set."
        );
        Ok(TemplateLibrary::from_templates(templates))
    }
}

fn convert_template(raw: RawTemplate) -> Result<NucleotideTemplate, TemplateSetError> {
    let kind = BaseKind::parse(&raw.base_kind).ok_or_else(|| TemplateSetError::UnknownBaseKind {
        template: raw.name.clone(),
        value: raw.base_kind.clone(),
    })?;

    let mut atoms = HashMap::with_capacity(raw.atoms.len());
    for (name, [x, y, z]) in &raw.atoms {
        let atom = AtomName::parse(name).ok_or_else(|| TemplateSetError::UnknownAtom {
            template: raw.name.clone(),
            atom: name.clone(),
        })?;
        atoms.insert(atom, Point3::new(*x, *y, *z));
    }

    let common = CommonAtoms {
        p: take_atom(&raw.name, &mut atoms, AtomName::P)?,
        op1: take_atom(&raw.name, &mut atoms, AtomName::Op1)?,
        op2: take_atom(&raw.name, &mut atoms, AtomName::Op2)?,
        o5p: take_atom(&raw.name, &mut atoms, AtomName::O5p)?,
        c5p: take_atom(&raw.name, &mut atoms, AtomName::C5p)?,
        h5p: take_atom(&raw.name, &mut atoms, AtomName::H5p)?,
        h5pp: take_atom(&raw.name, &mut atoms, AtomName::H5pp)?,
        c4p: take_atom(&raw.name, &mut atoms, AtomName::C4p)?,
        h4p: take_atom(&raw.name, &mut atoms, AtomName::H4p)?,
        o4p: take_atom(&raw.name, &mut atoms, AtomName::O4p)?,
        c1p: take_atom(&raw.name, &mut atoms, AtomName::C1p)?,
        h1p: take_atom(&raw.name, &mut atoms, AtomName::H1p)?,
        c2p: take_atom(&raw.name, &mut atoms, AtomName::C2p)?,
        h2pp: take_atom(&raw.name, &mut atoms, AtomName::H2pp)?,
        o2p: take_atom(&raw.name, &mut atoms, AtomName::O2p)?,
        h2p: take_atom(&raw.name, &mut atoms, AtomName::H2p)?,
        c3p: take_atom(&raw.name, &mut atoms, AtomName::C3p)?,
        h3p: take_atom(&raw.name, &mut atoms, AtomName::H3p)?,
        o3p: take_atom(&raw.name, &mut atoms, AtomName::O3p)?,
        n1: take_atom(&raw.name, &mut atoms, AtomName::N1)?,
        n3: take_atom(&raw.name, &mut atoms, AtomName::N3)?,
        c2: take_atom(&raw.name, &mut atoms, AtomName::C2)?,
        c4: take_atom(&raw.name, &mut atoms, AtomName::C4)?,
        c5: take_atom(&raw.name, &mut atoms, AtomName::C5)?,
        c6: take_atom(&raw.name, &mut atoms, AtomName::C6)?,
    };

    let payload = match kind {
        BaseKind::Adenine => BasePayload::Adenine(AdenineAtoms {
            n6: take_atom(&raw.name, &mut atoms, AtomName::N6)?,
            n7: take_atom(&raw.name, &mut atoms, AtomName::N7)?,
            n9: take_atom(&raw.name, &mut atoms, AtomName::N9)?,
            c8: take_atom(&raw.name, &mut atoms, AtomName::C8)?,
            h2: take_atom(&raw.name, &mut atoms, AtomName::H2)?,
            h61: take_atom(&raw.name, &mut atoms, AtomName::H61)?,
            h62: take_atom(&raw.name, &mut atoms, AtomName::H62)?,
            h8: take_atom(&raw.name, &mut atoms, AtomName::H8)?,
        }),
        BaseKind::Cytosine => BasePayload::Cytosine(CytosineAtoms {
            n4: take_atom(&raw.name, &mut atoms, AtomName::N4)?,
            o2: take_atom(&raw.name, &mut atoms, AtomName::O2)?,
            h41: take_atom(&raw.name, &mut atoms, AtomName::H41)?,
            h42: take_atom(&raw.name, &mut atoms, AtomName::H42)?,
            h5: take_atom(&raw.name, &mut atoms, AtomName::H5)?,
            h6: take_atom(&raw.name, &mut atoms, AtomName::H6)?,
        }),
        BaseKind::Guanine => BasePayload::Guanine(GuanineAtoms {
            n2: take_atom(&raw.name, &mut atoms, AtomName::N2)?,
            n7: take_atom(&raw.name, &mut atoms, AtomName::N7)?,
            n9: take_atom(&raw.name, &mut atoms, AtomName::N9)?,
            c8: take_atom(&raw.name, &mut atoms, AtomName::C8)?,
            o6: take_atom(&raw.name, &mut atoms, AtomName::O6)?,
            h1: take_atom(&raw.name, &mut atoms, AtomName::H1)?,
            h21: take_atom(&raw.name, &mut atoms, AtomName::H21)?,
            h22: take_atom(&raw.name, &mut atoms, AtomName::H22)?,
            h8: take_atom(&raw.name, &mut atoms, AtomName::H8)?,
        }),
        BaseKind::Uracil => BasePayload::Uracil(UracilAtoms {
            o2: take_atom(&raw.name, &mut atoms, AtomName::O2)?,
            o4: take_atom(&raw.name, &mut atoms, AtomName::O4)?,
            h3: take_atom(&raw.name, &mut atoms, AtomName::H3)?,
            h5: take_atom(&raw.name, &mut atoms, AtomName::H5)?,
            h6: take_atom(&raw.name, &mut atoms, AtomName::H6)?,
        }),
    };

    if let Some(atom) = atoms.keys().next() {
        return Err(TemplateSetError::ForeignAtom {
            template: raw.name,
            atom: *atom,
        });
    }

    Ok(NucleotideTemplate::new(
        raw.name,
        transform_from_row(&raw.transforms.base_frame),
        transform_from_row(&raw.transforms.po3_60),
        transform_from_row(&raw.transforms.po3_180),
        transform_from_row(&raw.transforms.po3_275),
        common,
        payload,
    ))
}

fn take_atom(
    template: &str,
    atoms: &mut HashMap<AtomName, Point3<f64>>,
    atom: AtomName,
) -> Result<Point3<f64>, TemplateSetError> {
    atoms.remove(&atom).ok_or_else(|| TemplateSetError::MissingAtom {
        template: template.to_string(),
        atom,
    })
}

fn transform_from_row(c: &[f64; 12]) -> Transform {
    Transform::from_coefficients(
        c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8], c[9], c[10], c[11],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    struct TestSetup {
        _temp_dir: TempDir,
        path: std::path::PathBuf,
    }

    fn setup(content: &str) -> TestSetup {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("templates.toml");
        let mut file = File::create(&path).expect("create template file");
        file.write_all(content.as_bytes())
            .expect("write template file");
        TestSetup {
            _temp_dir: temp_dir,
            path,
        }
    }

    fn transform_row(t: &Transform) -> String {
        let m = t.linear();
        let v = t.translation();
        format!(
            "[{:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}]",
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
            v.x,
            v.y,
            v.z
        )
    }

    fn template_toml(template: &NucleotideTemplate) -> String {
        let mut out = String::new();
        out.push_str("[[templates]]\n");
        out.push_str(&format!("name = {:?}\n", template.name()));
        out.push_str(&format!("base-kind = {:?}\n\n", template.kind().code()));

        out.push_str("[templates.transforms]\n");
        let [r60, r180, r275] = template.po3_rotamers();
        out.push_str(&format!(
            "base-frame = {}\n",
            transform_row(template.base_frame_tfo())
        ));
        out.push_str(&format!("po3-60 = {}\n", transform_row(r60)));
        out.push_str(&format!("po3-180 = {}\n", transform_row(r180)));
        out.push_str(&format!("po3-275 = {}\n\n", transform_row(r275)));

        out.push_str("[templates.atoms]\n");
        for (name, point) in template.atoms() {
            out.push_str(&format!(
                "{:?} = [{:?}, {:?}, {:?}]\n",
                name.as_str(),
                point.x,
                point.y,
                point.z
            ));
        }
        out
    }

    fn builtin_uracil_toml() -> String {
        template_toml(TemplateLibrary::builtin().get("U").unwrap())
    }

    #[test]
    fn round_trips_a_builtin_template() {
        let test = setup(&builtin_uracil_toml());
        let library = TemplateLibrary::load(&test.path).expect("load template set");

        assert_eq!(library.len(), 1);
        let loaded = library.get("U").expect("loaded template");
        let builtin = TemplateLibrary::builtin().get("U").unwrap();
        assert_eq!(**loaded, **builtin);
    }

    #[test]
    fn loads_multiple_templates_in_file_order() {
        let mut content = builtin_uracil_toml();
        content.push('\n');
        content.push_str(&template_toml(
            TemplateLibrary::builtin().get("A01").unwrap(),
        ));
        let test = setup(&content);

        let library = TemplateLibrary::load(&test.path).expect("load template set");
        let names: Vec<&str> = library.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["U", "A01"]);
    }

    #[test]
    fn missing_required_atom_is_rejected() {
        let content: String = builtin_uracil_toml()
            .lines()
            .filter(|line| !line.starts_with("\"H3\""))
            .collect::<Vec<_>>()
            .join("\n");
        let test = setup(&content);

        let error = TemplateLibrary::load(&test.path).unwrap_err();
        assert!(matches!(
            error,
            TemplateSetError::MissingAtom {
                atom: AtomName::H3,
                ..
            }
        ));
    }

    #[test]
    fn foreign_atom_is_rejected() {
        let mut content = builtin_uracil_toml();
        content.push_str("\"N9\" = [0.0, 0.0, 0.0]\n");
        let test = setup(&content);

        let error = TemplateLibrary::load(&test.path).unwrap_err();
        assert!(matches!(
            error,
            TemplateSetError::ForeignAtom {
                atom: AtomName::N9,
                ..
            }
        ));
    }

    #[test]
    fn unknown_atom_name_is_rejected() {
        let mut content = builtin_uracil_toml();
        content.push_str("\"XX\" = [0.0, 0.0, 0.0]\n");
        let test = setup(&content);

        let error = TemplateLibrary::load(&test.path).unwrap_err();
        match error {
            TemplateSetError::UnknownAtom { atom, .. } => assert_eq!(atom, "XX"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_base_kind_is_rejected() {
        let content = builtin_uracil_toml().replace("base-kind = \"U\"", "base-kind = \"T\"");
        let test = setup(&content);

        let error = TemplateLibrary::load(&test.path).unwrap_err();
        match error {
            TemplateSetError::UnknownBaseKind { value, .. } => assert_eq!(value, "T"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut content = builtin_uracil_toml();
        content.push('\n');
        content.push_str(&builtin_uracil_toml());
        let test = setup(&content);

        let error = TemplateLibrary::load(&test.path).unwrap_err();
        match error {
            TemplateSetError::DuplicateName { name } => assert_eq!(name, "U"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparsable_file_reports_a_toml_error() {
        let test = setup("this is not a template set");
        let error = TemplateLibrary::load(&test.path).unwrap_err();
        assert!(matches!(error, TemplateSetError::Toml { .. }));
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.toml");
        let error = TemplateLibrary::load(&path).unwrap_err();
        assert!(matches!(error, TemplateSetError::Io { .. }));
    }
}

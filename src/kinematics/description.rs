use nalgebra as na;
use crate::types::*;
use crate::symbolic::{evaluate_matrix, symbol, Expr, SymbolicError};
use crate::kinematics::link::{link, LinkParameters};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error types for link description files
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unit conversion error: {0}")]
    UnitError(#[from] UnitError),

    #[error("Symbolic evaluation error: {0}")]
    SymbolicError(#[from] SymbolicError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Parameter {0} is a joint variable, not a fixed value")]
    VariableParameter(&'static str),
}

/// An angle-valued DH parameter: a fixed value or a named joint variable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleParameter {
    Fixed(AngleValue),
    Variable { var: String },
}

impl AngleParameter {
    /// Radians, as an expression (fixed values collapse to constants)
    fn to_expr(&self) -> Result<Expr, DescriptionError> {
        match self {
            AngleParameter::Fixed(value) => {
                Ok(Expr::from(value.to_angle()?.get::<radian>()))
            }
            AngleParameter::Variable { var } => Ok(symbol(var.clone())),
        }
    }

    fn fixed(&self, field: &'static str) -> Result<Angle, DescriptionError> {
        match self {
            AngleParameter::Fixed(value) => Ok(value.to_angle()?),
            AngleParameter::Variable { .. } => {
                Err(DescriptionError::VariableParameter(field))
            }
        }
    }
}

/// A length-valued DH parameter: a fixed value or a named joint variable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthParameter {
    Fixed(LengthValue),
    Variable { var: String },
}

impl LengthParameter {
    /// Meters, as an expression (fixed values collapse to constants)
    fn to_expr(&self) -> Result<Expr, DescriptionError> {
        match self {
            LengthParameter::Fixed(value) => {
                Ok(Expr::from(to_coord(value.to_distance()?)))
            }
            LengthParameter::Variable { var } => Ok(symbol(var.clone())),
        }
    }

    fn fixed(&self, field: &'static str) -> Result<Distance, DescriptionError> {
        match self {
            LengthParameter::Fixed(value) => Ok(value.to_distance()?),
            LengthParameter::Variable { .. } => {
                Err(DescriptionError::VariableParameter(field))
            }
        }
    }
}

/// Description of a single DH link, as written in a JSON or TOML file.
///
/// Each parameter is either a fixed value with a unit string or a named
/// joint variable. Joint variables stay symbolic until evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDescription {
    /// Human-readable link name
    pub name: String,

    pub joint_angle: AngleParameter,
    pub link_offset: LengthParameter,
    pub link_twist: AngleParameter,
    pub link_length: LengthParameter,
}

impl LinkDescription {
    /// Load a description from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load a description from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&text)?)
    }

    /// Load a description, picking the parser from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => Err(DescriptionError::InvalidFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Link transform with joint variables left symbolic
    pub fn symbolic_transform(&self) -> Result<na::Matrix4<Expr>, DescriptionError> {
        Ok(link(
            self.joint_angle.to_expr()?,
            self.link_offset.to_expr()?,
            self.link_twist.to_expr()?,
            self.link_length.to_expr()?,
        ))
    }

    /// Strict numeric view; errors if any parameter is a joint variable
    pub fn parameters(&self) -> Result<LinkParameters, DescriptionError> {
        Ok(LinkParameters::new(
            self.joint_angle.fixed("joint_angle")?,
            self.link_offset.fixed("link_offset")?,
            self.link_twist.fixed("link_twist")?,
            self.link_length.fixed("link_length")?,
        ))
    }

    /// Numeric link transform at the given joint values (radians / meters)
    pub fn transform_at(
        &self,
        joints: &HashMap<String, f64>,
    ) -> Result<na::Matrix4<f64>, DescriptionError> {
        let symbolic = self.symbolic_transform()?;
        Ok(evaluate_matrix(&symbolic, joints)?)
    }

    /// Names of the joint variables this link depends on
    pub fn joint_variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        for parameter in [&self.joint_angle, &self.link_twist] {
            if let AngleParameter::Variable { var } = parameter {
                names.push(var.clone());
            }
        }
        for parameter in [&self.link_offset, &self.link_length] {
            if let LengthParameter::Variable { var } = parameter {
                names.push(var.clone());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::{cos, sin};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const SHOULDER_TOML: &str = r#"
name = "shoulder"

[joint_angle]
var = "t1"

[link_offset]
value = 0.4
unit = "m"

[link_twist]
value = -90.0
unit = "deg"

[link_length]
value = 25.0
unit = "mm"
"#;

    const SHOULDER_JSON: &str = r#"{
        "name": "shoulder",
        "joint_angle": { "var": "t1" },
        "link_offset": { "value": 0.4, "unit": "m" },
        "link_twist": { "value": -90.0, "unit": "deg" },
        "link_length": { "value": 25.0, "unit": "mm" }
    }"#;

    fn write_temp(dir: &tempfile::TempDir, file: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(file);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = write_temp(&dir, "shoulder.toml", SHOULDER_TOML);
        let json_path = write_temp(&dir, "shoulder.json", SHOULDER_JSON);

        let from_toml = LinkDescription::from_file(&toml_path).unwrap();
        let from_json = LinkDescription::from_file(&json_path).unwrap();

        assert_eq!(from_toml.name, "shoulder");
        assert_eq!(from_json.name, "shoulder");
        assert_eq!(from_toml.joint_variables(), vec!["t1".to_string()]);
        assert_eq!(from_json.joint_variables(), vec!["t1".to_string()]);
    }

    #[test]
    fn test_unrecognized_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "shoulder.yaml", SHOULDER_TOML);

        assert!(matches!(
            LinkDescription::from_file(&path),
            Err(DescriptionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_symbolic_transform_keeps_variable() {
        let desc: LinkDescription = toml::from_str(SHOULDER_TOML).unwrap();
        let m = desc.symbolic_transform().unwrap();

        assert_eq!(m[(0, 0)], cos(symbol("t1")));
        assert_eq!(m[(1, 0)], sin(symbol("t1")));
        // Fixed parameters are plain numbers by the time the matrix exists
        assert!(m[(2, 3)].as_number().is_some());
    }

    #[test]
    fn test_transform_at_matches_direct_link() {
        let desc: LinkDescription = toml::from_str(SHOULDER_TOML).unwrap();

        let mut joints = HashMap::new();
        joints.insert("t1".to_string(), 0.3);

        let at = desc.transform_at(&joints).unwrap();
        let direct = link(0.3, 0.4, -FRAC_PI_2, 0.025);

        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(at[(row, col)], direct[(row, col)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_transform_at_with_missing_joint_errors() {
        let desc: LinkDescription = toml::from_str(SHOULDER_TOML).unwrap();
        let result = desc.transform_at(&HashMap::new());
        assert!(matches!(
            result,
            Err(DescriptionError::SymbolicError(SymbolicError::UnboundSymbol(name))) if name == "t1"
        ));
    }

    #[test]
    fn test_parameters_requires_fixed_values() {
        let desc: LinkDescription = toml::from_str(SHOULDER_TOML).unwrap();
        assert!(matches!(
            desc.parameters(),
            Err(DescriptionError::VariableParameter("joint_angle"))
        ));

        let fixed = LinkDescription {
            name: "wrist".to_string(),
            joint_angle: AngleParameter::Fixed(AngleValue::new(30.0, "deg")),
            link_offset: LengthParameter::Fixed(LengthValue::new(0.0, "m")),
            link_twist: AngleParameter::Fixed(AngleValue::new(0.0, "rad")),
            link_length: LengthParameter::Fixed(LengthValue::new(10.0, "cm")),
        };
        let params = fixed.parameters().unwrap();
        assert_relative_eq!(params.joint_angle.get::<degree>(), 30.0, epsilon = 1e-12);
        assert_relative_eq!(to_coord(params.link_length), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_unit_surfaces_as_unit_error() {
        let desc = LinkDescription {
            name: "bad".to_string(),
            joint_angle: AngleParameter::Fixed(AngleValue::new(1.0, "grads")),
            link_offset: LengthParameter::Fixed(LengthValue::new(0.0, "m")),
            link_twist: AngleParameter::Fixed(AngleValue::new(0.0, "rad")),
            link_length: LengthParameter::Fixed(LengthValue::new(0.0, "m")),
        };
        assert!(matches!(
            desc.symbolic_transform(),
            Err(DescriptionError::UnitError(UnitError::UnknownAngleUnit(_)))
        ));
    }
}

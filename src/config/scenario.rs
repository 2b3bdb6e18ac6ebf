use crate::domain::member::{CompositeProfessor, Department};
use crate::domain::person::PersonKind;
use crate::utils::error::{Result, UniversityError};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub scenario: ScenarioInfo,
    #[serde(default)]
    pub people: Vec<PersonConfig>,
    #[serde(default)]
    pub payments: Vec<PaymentConfig>,
    pub department: Option<DepartmentConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonConfig {
    pub kind: PersonKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentConfig {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberConfig>,
}

/// Exactly one of `professor` / `department` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberConfig {
    pub professor: Option<String>,
    pub department: Option<DepartmentConfig>,
}

impl Default for ScenarioInfo {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: None,
        }
    }
}

impl Default for Scenario {
    /// The fixed university walkthrough run when no scenario file is given.
    fn default() -> Self {
        Self {
            scenario: ScenarioInfo {
                name: "university".to_string(),
                description: Some("Singleton, factory, adapter and composite walkthrough".to_string()),
            },
            people: vec![
                PersonConfig {
                    kind: PersonKind::Student,
                    name: "John".to_string(),
                },
                PersonConfig {
                    kind: PersonKind::Professor,
                    name: "Dr. Smith".to_string(),
                },
                PersonConfig {
                    kind: PersonKind::Staff,
                    name: "Mary".to_string(),
                },
            ],
            payments: vec![PaymentConfig { amount: 100.0 }],
            department: Some(DepartmentConfig {
                name: "Computer Science Department".to_string(),
                members: vec![
                    MemberConfig::professor("Dr. Smith"),
                    MemberConfig::professor("Dr. Johnson"),
                ],
            }),
        }
    }
}

impl MemberConfig {
    pub fn professor(name: impl Into<String>) -> Self {
        Self {
            professor: Some(name.into()),
            department: None,
        }
    }

    pub fn department(department: DepartmentConfig) -> Self {
        Self {
            professor: None,
            department: Some(department),
        }
    }
}

impl Scenario {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UniversityError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEPARTMENT_NAME})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UniversityError::ConfigParse {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the composite tree described by `[department]`, if any.
    pub fn build_department(&self) -> Result<Option<Department>> {
        self.department
            .as_ref()
            .map(|config| config.build("department"))
            .transpose()
    }
}

/// What a `[[members]]` entry resolved to.
enum MemberEntry<'a> {
    Professor(&'a str),
    Department(&'a DepartmentConfig),
}

impl MemberConfig {
    fn entry(&self, field: &str) -> Result<MemberEntry<'_>> {
        match (&self.professor, &self.department) {
            (Some(name), None) => Ok(MemberEntry::Professor(name)),
            (Some(_), Some(_)) => Err(UniversityError::InvalidConfigValue {
                field: field.to_string(),
                value: "professor + department".to_string(),
                reason: "A member is either a professor or a department, not both".to_string(),
            }),
            (None, nested) => {
                let nested =
                    validate_required_field(&format!("{}.professor|department", field), nested)?;
                Ok(MemberEntry::Department(nested))
            }
        }
    }
}

impl DepartmentConfig {
    fn build(&self, field: &str) -> Result<Department> {
        let mut department = Department::new(self.name.clone());
        for (index, member) in self.members.iter().enumerate() {
            let member_field = format!("{}.members[{}]", field, index);
            match member.entry(&member_field)? {
                MemberEntry::Professor(name) => department.add_member(CompositeProfessor::new(name)),
                MemberEntry::Department(nested) => {
                    department.add_member(nested.build(&format!("{}.department", member_field))?)
                }
            }
        }
        Ok(department)
    }

    fn validate_at(&self, field: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.name", field), &self.name)?;
        for (index, member) in self.members.iter().enumerate() {
            let member_field = format!("{}.members[{}]", field, index);
            match member.entry(&member_field)? {
                MemberEntry::Professor(name) => {
                    validate_non_empty_string(&format!("{}.professor", member_field), name)?
                }
                MemberEntry::Department(nested) => {
                    nested.validate_at(&format!("{}.department", member_field))?
                }
            }
        }
        Ok(())
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        for (index, person) in self.people.iter().enumerate() {
            validate_non_empty_string(&format!("people[{}].name", index), &person.name)?;
        }

        for (index, payment) in self.payments.iter().enumerate() {
            validate_finite(&format!("payments[{}].amount", index), payment.amount)?;
        }

        if let Some(department) = &self.department {
            department.validate_at("department")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_scenario() {
        let toml_content = r#"
[scenario]
name = "small"

[[people]]
kind = "student"
name = "Ada"

[[people]]
kind = "staff"
name = "Bob"

[[payments]]
amount = 42.5

[department]
name = "Mathematics"

[[department.members]]
professor = "Dr. Noether"
"#;

        let scenario = Scenario::from_toml_str(toml_content).unwrap();
        assert_eq!(scenario.scenario.name, "small");
        assert_eq!(scenario.people.len(), 2);
        assert_eq!(scenario.people[1].kind, PersonKind::Staff);
        assert_eq!(scenario.payments[0].amount, 42.5);
        assert!(scenario.validate().is_ok());

        let department = scenario.build_department().unwrap().unwrap();
        assert_eq!(department.name(), "Mathematics");
        assert_eq!(department.members()[0].name(), "Dr. Noether");
    }

    #[test]
    fn test_sections_are_optional() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert_eq!(scenario.scenario.name, "default");
        assert!(scenario.people.is_empty());
        assert!(scenario.build_department().unwrap().is_none());
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let result = Scenario::from_toml_str("[[people]]\nkind = \"dean\"\nname = \"X\"\n");
        assert!(matches!(result, Err(UniversityError::ConfigParse { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("UNIVERSITY_PATTERNS_TEST_DEPT", "Physics");
        let content = r#"
[department]
name = "${UNIVERSITY_PATTERNS_TEST_DEPT}"
"#;
        let scenario = Scenario::from_toml_str(content).unwrap();
        assert_eq!(scenario.department.unwrap().name, "Physics");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let content = r#"
[[people]]
kind = "professor"
name = "${UNIVERSITY_PATTERNS_SURELY_UNSET}"
"#;
        let scenario = Scenario::from_toml_str(content).unwrap();
        assert_eq!(scenario.people[0].name, "${UNIVERSITY_PATTERNS_SURELY_UNSET}");
    }

    #[test]
    fn test_blank_name_rejected_with_field_path() {
        let mut scenario = Scenario::default();
        scenario.people[1].name = "  ".to_string();
        match scenario.validate() {
            Err(UniversityError::InvalidConfigValue { field, .. }) => {
                assert_eq!(field, "people[1].name")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut scenario = Scenario::default();
        scenario.payments.push(PaymentConfig { amount: f64::NAN });
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_member_needs_exactly_one_kind() {
        let mut scenario = Scenario::default();
        if let Some(department) = scenario.department.as_mut() {
            department.members.push(MemberConfig {
                professor: None,
                department: None,
            });
        }
        assert!(matches!(
            scenario.validate(),
            Err(UniversityError::MissingConfig { .. })
        ));

        let mut scenario = Scenario::default();
        if let Some(department) = scenario.department.as_mut() {
            department.members.push(MemberConfig {
                professor: Some("Dr. X".to_string()),
                department: Some(DepartmentConfig {
                    name: "Y".to_string(),
                    members: vec![],
                }),
            });
        }
        assert!(matches!(
            scenario.validate(),
            Err(UniversityError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[payments]]\namount = -5.0").unwrap();
        let scenario = Scenario::from_file(file.path()).unwrap();
        assert_eq!(scenario.payments[0].amount, -5.0);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Scenario::from_file("/definitely/not/here/scenario.toml");
        assert!(matches!(result, Err(UniversityError::Io(_))));
    }

    #[test]
    fn test_default_scenario_is_valid() {
        assert!(Scenario::default().validate().is_ok());
        assert!(Scenario::default().to_json_pretty().unwrap().contains("Dr. Johnson"));
    }

    #[test]
    fn test_nested_member_kind_checked_with_field_path() {
        let scenario = Scenario {
            department: Some(DepartmentConfig {
                name: "Science".to_string(),
                members: vec![MemberConfig::department(DepartmentConfig {
                    name: "Lab".to_string(),
                    members: vec![MemberConfig {
                        professor: Some("Dr. X".to_string()),
                        department: Some(DepartmentConfig {
                            name: "Y".to_string(),
                            members: vec![],
                        }),
                    }],
                })],
            }),
            ..Scenario::default()
        };

        match scenario.validate() {
            Err(UniversityError::InvalidConfigValue { field, .. }) => {
                assert_eq!(field, "department.members[0].department.members[0]")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(scenario.build_department().is_err());
    }

    #[test]
    fn test_blank_nested_professor_rejected() {
        let mut scenario = Scenario::default();
        if let Some(department) = scenario.department.as_mut() {
            department.members.push(MemberConfig::department(DepartmentConfig {
                name: "Lab".to_string(),
                members: vec![MemberConfig::professor(" ")],
            }));
        }
        match scenario.validate() {
            Err(UniversityError::InvalidConfigValue { field, .. }) => {
                assert_eq!(field, "department.members[2].department.members[0].professor")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

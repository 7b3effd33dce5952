//! Configuration of the move_base action interface.
//!
//! Values come from ROS-style command line arguments. Everything after
//! `--ros-args` (up to `--` or the next `--ros-args`) is interpreted:
//!
//! | argument | meaning |
//! |----------|---------|
//! | `-p`, `--param [node:]name:=value` | set a parameter, the value is YAML |
//! | `--params-file <path>` | load parameters from a YAML file |
//! | `--log-level [logger:=]LEVEL` | set the log level |
//! | `-r`, `--remap __node:=name` | rename the node |
//!
//! Parameter files have the usual layout:
//!
//! ```yaml
//! rosplan_interface_movebase:
//!   ros__parameters:
//!     action_server: /robot1/move_base
//!     goal_timeout: 120.0
//! ```
//!
//! Command line parameters override parameter files.

use crate::logger::LogLevel;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use yaml_rust2::{Yaml, YamlLoader};

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing value for argument '{0}'")]
    MissingArgumentValue(String),

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("Invalid parameter assignment '{0}': expected format 'name:=value' or 'node:name:=value'")]
    InvalidParamAssignment(String),

    #[error("Invalid YAML value in parameter '{0}': {1}")]
    InvalidYamlValue(String, String),

    #[error("Invalid remapping rule '{0}': expected format 'from:=to' or 'node:from:=to'")]
    InvalidRemapRule(String),

    #[error("Invalid log level '{0}': expected DEBUG, INFO, WARN, ERROR, or FATAL")]
    InvalidLogLevel(String),

    #[error("Parameter file not found: {0}")]
    ParamFileNotFound(PathBuf),

    #[error("Failed to parse parameter file '{0}': {1}")]
    ParamFileParseError(PathBuf, String),

    #[error("Invalid parameter file structure: {0}")]
    InvalidParamFileStructure(String),

    #[error("Parameter '{name}' expects {expected}")]
    TypeMismatch { name: String, expected: &'static str },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A `name:=value` assignment, optionally restricted to one node.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamAssignment {
    pub node_name: Option<String>,
    pub name: String,
    pub value: Yaml,
}

impl ParamAssignment {
    /// True if the assignment targets `node_name`.
    ///
    /// Wildcards `*` and `**` match any node.
    fn applies_to(&self, node_name: &str) -> bool {
        match self.node_name.as_deref() {
            None => true,
            Some(target) => {
                let target = target.trim_start_matches('/');
                target == node_name || target == "*" || target == "**"
            }
        }
    }
}

/// Arguments found in the `--ros-args` sections.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RosArgs {
    pub param_assignments: Vec<ParamAssignment>,
    pub param_files: Vec<PathBuf>,
    /// `(logger, level)`, a `None` logger is global.
    pub log_levels: Vec<(Option<String>, LogLevel)>,
    pub node_name: Option<String>,
}

/// Split `args` into ROS arguments and user arguments.
pub fn parse_ros_args(args: &[String]) -> ConfigResult<(RosArgs, Vec<String>)> {
    let mut ros_args = RosArgs::default();
    let mut user_args = Vec::new();
    let mut in_section = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--ros-args" {
            in_section = true;
            continue;
        }
        if !in_section {
            user_args.push(arg.clone());
            continue;
        }

        let mut value_of = |flag: &str| {
            iter.next()
                .ok_or_else(|| ConfigError::MissingArgumentValue(flag.to_string()))
        };

        match arg.as_str() {
            "--" => in_section = false,
            "--param" | "-p" => {
                let assignment = parse_param_assignment(value_of("--param")?)?;
                ros_args.param_assignments.push(assignment);
            }
            "--params-file" => {
                ros_args
                    .param_files
                    .push(PathBuf::from(value_of("--params-file")?));
            }
            "--log-level" => {
                let level = parse_log_level_assignment(value_of("--log-level")?)?;
                ros_args.log_levels.push(level);
            }
            "--remap" | "-r" => {
                let rule = value_of("--remap")?;
                let (from, to) = rule
                    .split_once(":=")
                    .ok_or_else(|| ConfigError::InvalidRemapRule(rule.clone()))?;
                // Only the node name can be remapped; node-specific rules keep the last token
                let from = from.rsplit(':').next().unwrap_or(from);
                if from == "__node" || from == "__name" {
                    ros_args.node_name = Some(to.to_string());
                }
            }
            other => return Err(ConfigError::UnexpectedArgument(other.to_string())),
        }
    }

    Ok((ros_args, user_args))
}

/// Parse `name:=value` or `node:name:=value`, the value being YAML.
fn parse_param_assignment(s: &str) -> ConfigResult<ParamAssignment> {
    let (lhs, raw_value) = s
        .split_once(":=")
        .ok_or_else(|| ConfigError::InvalidParamAssignment(s.to_string()))?;

    let value = YamlLoader::load_from_str(raw_value)
        .map_err(|e| ConfigError::InvalidYamlValue(lhs.to_string(), e.to_string()))?
        .into_iter()
        .next()
        .unwrap_or_else(|| Yaml::String(String::new()));

    let (node_name, name) = match lhs.split_once(':') {
        Some((node, name)) if !name.contains(':') => (Some(node.to_string()), name),
        Some(_) => return Err(ConfigError::InvalidParamAssignment(s.to_string())),
        None => (None, lhs),
    };
    if name.is_empty() {
        return Err(ConfigError::InvalidParamAssignment(s.to_string()));
    }

    Ok(ParamAssignment {
        node_name,
        name: name.to_string(),
        value,
    })
}

/// Parse `LEVEL` or `logger:=LEVEL`.
fn parse_log_level_assignment(s: &str) -> ConfigResult<(Option<String>, LogLevel)> {
    let (logger, level) = match s.split_once(":=") {
        Some((logger, level)) => (Some(logger.to_string()), level),
        None => (None, s),
    };
    let level = level
        .parse::<LogLevel>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
    Ok((logger, level))
}

/// Load the assignments of a parameter file.
pub fn parse_param_file(path: &Path) -> ConfigResult<Vec<ParamAssignment>> {
    let content = fs::read_to_string(path)
        .map_err(|_| ConfigError::ParamFileNotFound(path.to_path_buf()))?;
    let docs = YamlLoader::load_from_str(&content)
        .map_err(|e| ConfigError::ParamFileParseError(path.to_path_buf(), e.to_string()))?;

    let Some(doc) = docs.first() else {
        return Ok(Vec::new());
    };
    let root = doc.as_hash().ok_or_else(|| {
        ConfigError::InvalidParamFileStructure("Root element must be a mapping".to_string())
    })?;

    let ros_params_key = Yaml::String("ros__parameters".to_string());
    let mut params = Vec::new();
    for (node_key, node_value) in root {
        let node_name = node_key.as_str().ok_or_else(|| {
            ConfigError::InvalidParamFileStructure("Node name must be a string".to_string())
        })?;
        let section = node_value
            .as_hash()
            .and_then(|h| h.get(&ros_params_key))
            .and_then(Yaml::as_hash)
            .ok_or_else(|| {
                ConfigError::InvalidParamFileStructure(format!(
                    "Node '{node_name}' must have a 'ros__parameters' mapping"
                ))
            })?;

        for (key, value) in section {
            let name = key.as_str().ok_or_else(|| {
                ConfigError::InvalidParamFileStructure("Parameter name must be a string".to_string())
            })?;
            params.push(ParamAssignment {
                node_name: Some(node_name.to_string()),
                name: name.to_string(),
                value: value.clone(),
            });
        }
    }

    Ok(params)
}

/// Configuration of the move_base action interface.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveBaseConfig {
    /// Name of the node.
    pub node_name: String,
    /// move_base action server.
    pub action_server: String,
    /// Name of the PDDL action handled.
    pub pddl_action_name: String,
    pub clear_costmaps_service: String,
    pub knowledge_update_service: String,
    pub message_store_service: String,
    pub action_dispatch_topic: String,
    pub action_feedback_topic: String,
    /// Robot named in the `robot_at` fact.
    pub robot_name: String,
    /// Time allowed to move_base, `None` waits forever.
    pub goal_timeout: Option<Duration>,
    /// Pause after a successful move before reporting it.
    pub settle_time: Duration,
    /// Block until the action server is up before handling dispatches.
    pub wait_for_server: bool,
    pub log_level: Option<LogLevel>,
    unknown_parameters: Vec<String>,
}

impl Default for MoveBaseConfig {
    fn default() -> Self {
        Self {
            node_name: "rosplan_interface_movebase".to_string(),
            action_server: "/move_base".to_string(),
            pddl_action_name: "goto_waypoint".to_string(),
            clear_costmaps_service: "/move_base/clear_costmaps".to_string(),
            knowledge_update_service: "/kcl_rosplan/update_knowledge_base".to_string(),
            message_store_service: "/message_store/query_messages".to_string(),
            action_dispatch_topic: "/kcl_rosplan/action_dispatch".to_string(),
            action_feedback_topic: "/kcl_rosplan/action_feedback".to_string(),
            robot_name: "kenny".to_string(),
            goal_timeout: None,
            settle_time: Duration::from_secs(2),
            wait_for_server: false,
            log_level: None,
            unknown_parameters: Vec::new(),
        }
    }
}

impl MoveBaseConfig {
    /// Load the configuration from command line arguments.
    pub fn from_args(args: &[String]) -> ConfigResult<Self> {
        let (ros_args, _) = parse_ros_args(args)?;
        Self::from_ros_args(&ros_args)
    }

    /// Build the configuration from parsed arguments.
    pub fn from_ros_args(ros_args: &RosArgs) -> ConfigResult<Self> {
        let mut config = Self::default();
        if let Some(name) = &ros_args.node_name {
            config.node_name = name.clone();
        }

        for path in &ros_args.param_files {
            for assignment in parse_param_file(path)? {
                config.apply(&assignment)?;
            }
        }
        for assignment in &ros_args.param_assignments {
            config.apply(assignment)?;
        }

        // Later levels override earlier ones, a level for this node beats a global one
        let mut global_level = None;
        let mut node_level = None;
        for (logger, level) in &ros_args.log_levels {
            match logger {
                None => global_level = Some(*level),
                Some(logger) if *logger == config.node_name => node_level = Some(*level),
                Some(_) => {}
            }
        }
        config.log_level = node_level.or(global_level);

        Ok(config)
    }

    /// Apply an assignment if it targets this node.
    pub fn apply(&mut self, assignment: &ParamAssignment) -> ConfigResult<()> {
        if !assignment.applies_to(&self.node_name) {
            return Ok(());
        }
        self.set(&assignment.name, &assignment.value)
    }

    /// Set the parameter `name`.
    ///
    /// Unknown names are recorded in [`Self::unknown_parameters`].
    pub fn set(&mut self, name: &str, value: &Yaml) -> ConfigResult<()> {
        match name {
            "action_server" => self.action_server = as_string(name, value)?,
            "pddl_action_name" => self.pddl_action_name = as_string(name, value)?,
            "clear_costmaps_service" => self.clear_costmaps_service = as_string(name, value)?,
            "knowledge_update_service" => self.knowledge_update_service = as_string(name, value)?,
            "message_store_service" => self.message_store_service = as_string(name, value)?,
            "action_dispatch_topic" => self.action_dispatch_topic = as_string(name, value)?,
            "action_feedback_topic" => self.action_feedback_topic = as_string(name, value)?,
            "robot_name" => self.robot_name = as_string(name, value)?,
            "goal_timeout" => {
                let secs = as_seconds(name, value)?;
                self.goal_timeout = if secs <= 0.0 {
                    None
                } else {
                    Some(to_duration(name, secs)?)
                };
            }
            "settle_time" => {
                let secs = as_seconds(name, value)?;
                if secs < 0.0 {
                    return Err(mismatch(name, "a non-negative number of seconds"));
                }
                self.settle_time = to_duration(name, secs)?;
            }
            "wait_for_server" => {
                self.wait_for_server = value.as_bool().ok_or_else(|| mismatch(name, "a boolean"))?;
            }
            _ => self.unknown_parameters.push(name.to_string()),
        }
        Ok(())
    }

    /// Parameters that were set but are not known.
    pub fn unknown_parameters(&self) -> &[String] {
        &self.unknown_parameters
    }
}

fn mismatch(name: &str, expected: &'static str) -> ConfigError {
    ConfigError::TypeMismatch {
        name: name.to_string(),
        expected,
    }
}

fn as_string(name: &str, value: &Yaml) -> ConfigResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(name, "a string"))
}

fn as_seconds(name: &str, value: &Yaml) -> ConfigResult<f64> {
    match value {
        Yaml::Integer(i) => Ok(*i as f64),
        Yaml::Real(_) => value
            .as_f64()
            .ok_or_else(|| mismatch(name, "a number of seconds")),
        _ => Err(mismatch(name, "a number of seconds")),
    }
}

fn to_duration(name: &str, secs: f64) -> ConfigResult<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| mismatch(name, "a finite number of seconds"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = MoveBaseConfig::from_args(&args(&["rosplan_interface_movebase"])).unwrap();
        assert_eq!(config, MoveBaseConfig::default());
        assert_eq!(config.action_server, "/move_base");
        assert_eq!(config.pddl_action_name, "goto_waypoint");
        assert_eq!(config.goal_timeout, None);
        assert_eq!(config.settle_time, Duration::from_secs(2));
        assert!(!config.wait_for_server);
    }

    #[test]
    fn test_user_args_are_kept() {
        let (ros_args, user_args) = parse_ros_args(&args(&[
            "prog",
            "--user",
            "--ros-args",
            "-p",
            "robot_name:=bob",
            "--",
            "--other",
        ]))
        .unwrap();
        assert_eq!(user_args, args(&["prog", "--user", "--other"]));
        assert_eq!(ros_args.param_assignments.len(), 1);
    }

    #[test]
    fn test_cli_parameters() {
        let config = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "-p",
            "action_server:=/robot1/move_base",
            "-p",
            "goal_timeout:=30",
            "-p",
            "settle_time:=0.5",
            "--param",
            "wait_for_server:=true",
            "-p",
            "robot_name:=bob",
        ]))
        .unwrap();
        assert_eq!(config.action_server, "/robot1/move_base");
        assert_eq!(config.goal_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.settle_time, Duration::from_millis(500));
        assert!(config.wait_for_server);
        assert_eq!(config.robot_name, "bob");
    }

    #[test]
    fn test_non_positive_timeout_waits_forever() {
        let config =
            MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "-p", "goal_timeout:=0.0"]))
                .unwrap();
        assert_eq!(config.goal_timeout, None);

        let config =
            MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "-p", "goal_timeout:=-1"]))
                .unwrap();
        assert_eq!(config.goal_timeout, None);
    }

    #[test]
    fn test_type_mismatch() {
        let err =
            MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "-p", "goal_timeout:=soon"]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { name, .. } if name == "goal_timeout"));

        let err =
            MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "-p", "wait_for_server:=1"]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));

        let err =
            MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "-p", "settle_time:=-2.0"]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_parameter_is_recorded() {
        let config =
            MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "-p", "use_sim_time:=true"]))
                .unwrap();
        assert_eq!(config.unknown_parameters(), ["use_sim_time".to_string()]);
    }

    #[test]
    fn test_node_specific_parameters() {
        let config = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "-r",
            "__node:=mover",
            "-p",
            "other_node:robot_name:=alice",
            "-p",
            "mover:robot_name:=bob",
        ]))
        .unwrap();
        assert_eq!(config.node_name, "mover");
        assert_eq!(config.robot_name, "bob");
    }

    #[test]
    fn test_log_levels() {
        let config = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "--log-level",
            "warn",
            "--log-level",
            "rosplan_interface_movebase:=DEBUG",
            "--log-level",
            "somebody_else:=ERROR",
        ]))
        .unwrap();
        assert_eq!(config.log_level, Some(LogLevel::Debug));

        let config = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "--log-level",
            "warn",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(config.log_level, Some(LogLevel::Debug));

        let config = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "--log-level",
            "rosplan_interface_movebase:=ERROR",
            "--log-level",
            "info",
        ]))
        .unwrap();
        assert_eq!(config.log_level, Some(LogLevel::Error));

        let err = MoveBaseConfig::from_args(&args(&["prog", "--ros-args", "--log-level", "loud"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_malformed_arguments() {
        let err = parse_ros_args(&args(&["prog", "--ros-args", "-p"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgumentValue(_)));

        let err = parse_ros_args(&args(&["prog", "--ros-args", "-p", "no_value"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParamAssignment(_)));

        let err = parse_ros_args(&args(&["prog", "--ros-args", "--bogus"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedArgument(_)));
    }

    #[test]
    fn test_params_file_with_cli_override() {
        let path = std::env::temp_dir().join(format!(
            "rosplan_movebase_params_{}.yaml",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "/**:\n  ros__parameters:\n    robot_name: alice\n    goal_timeout: 60.0\n\
             rosplan_interface_movebase:\n  ros__parameters:\n    action_server: /robot1/move_base\n\
             other_node:\n  ros__parameters:\n    robot_name: mallory"
        )
        .unwrap();
        drop(file);

        let config = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "--params-file",
            path.to_str().unwrap(),
            "-p",
            "robot_name:=bob",
        ]))
        .unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.robot_name, "bob");
        assert_eq!(config.goal_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.action_server, "/robot1/move_base");
    }

    #[test]
    fn test_missing_params_file() {
        let err = MoveBaseConfig::from_args(&args(&[
            "prog",
            "--ros-args",
            "--params-file",
            "/nonexistent/params.yaml",
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParamFileNotFound(_)));
    }
}

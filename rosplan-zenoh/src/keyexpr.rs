//! Key expression construction and name resolution.
//!
//! Names follow the ROS conventions:
//!
//! - `/abs/name` is absolute
//! - `rel/name` is resolved inside the node namespace
//! - `~/priv/name` is resolved inside the node itself (`<namespace>/<node>/priv/name`)

use crate::error::Result;
use rosplan_core::Error as CoreError;

/// Prefix of liveliness tokens declared by action servers.
pub const ACTION_LIVELINESS_PREFIX: &str = "@rosplan_lv";

/// Build a topic/service key expression.
///
/// Format: `<domain_id>/<fully_qualified_name>/<mangled_type_name>`
///
/// # Example
///
/// ```
/// use rosplan_zenoh::topic_keyexpr;
///
/// let key = topic_keyexpr(0, "/move_base/goal", "actionlib_msgs/msg/ActionGoal");
/// assert_eq!(key, "0/move_base/goal/actionlib_msgs%msg%ActionGoal");
/// ```
pub fn topic_keyexpr(domain_id: u32, fq_name: &str, type_name: &str) -> String {
    // Remove leading slash from fq_name for key expression
    let name = fq_name.strip_prefix('/').unwrap_or(fq_name);
    format!("{}/{}/{}", domain_id, name, mangle_name(type_name))
}

/// Build the liveliness key expression an action server declares.
///
/// Format: `@rosplan_lv/<domain_id>/<mangled_action_name>/<mangled_type_name>`
pub fn action_liveliness_keyexpr(domain_id: u32, fq_action_name: &str, type_name: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        ACTION_LIVELINESS_PREFIX,
        domain_id,
        mangle_name(fq_action_name),
        mangle_name(type_name)
    )
}

/// Mangle a name by replacing `/` with `%`.
///
/// An empty name becomes a single `%`.
pub(crate) fn mangle_name(name: &str) -> String {
    if name.is_empty() {
        "%".to_string()
    } else {
        name.replace('/', "%")
    }
}

/// Validate a topic, service or action name before expansion.
///
/// # Errors
///
/// Returns `Error::InvalidName` if the name is empty, contains characters other
/// than alphanumerics, `_`, `/` and a leading `~`, contains `//`, ends with `/`
/// or has a token starting with a digit.
pub fn validate_name(name: &str) -> std::result::Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::invalid_name(name, "name must not be empty"));
    }
    let body = match name.strip_prefix('~') {
        Some(rest) if rest.is_empty() => return Ok(()),
        Some(rest) => rest
            .strip_prefix('/')
            .ok_or_else(|| CoreError::invalid_name(name, "'~' must be followed by '/'"))?,
        None => name,
    };
    if let Some(c) = body
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '/'))
    {
        return Err(CoreError::invalid_name(
            name,
            format!("invalid character '{c}'"),
        ));
    }
    if body.contains("//") {
        return Err(CoreError::invalid_name(name, "repeated '/'"));
    }
    if body.ends_with('/') && body != "/" {
        return Err(CoreError::invalid_name(name, "must not end with '/'"));
    }
    if body
        .split('/')
        .any(|token| token.starts_with(|c: char| c.is_ascii_digit()))
    {
        return Err(CoreError::invalid_name(
            name,
            "tokens must not start with a digit",
        ));
    }
    Ok(())
}

/// Expand `name` into a fully qualified name for the node `node_name` living in `namespace`.
///
/// # Example
///
/// ```
/// use rosplan_zenoh::expand_name;
///
/// assert_eq!(expand_name("/move_base", "mb", "/robot").unwrap(), "/move_base");
/// assert_eq!(expand_name("move_base", "mb", "/robot").unwrap(), "/robot/move_base");
/// assert_eq!(expand_name("~/status", "mb", "/robot").unwrap(), "/robot/mb/status");
/// ```
///
/// # Errors
///
/// Returns an error if the name is invalid.
pub fn expand_name(name: &str, node_name: &str, namespace: &str) -> Result<String> {
    validate_name(name)?;
    let namespace = namespace.trim_end_matches('/');
    let expanded = if name.starts_with('/') {
        name.to_string()
    } else if let Some(private) = name.strip_prefix('~') {
        format!("{namespace}/{node_name}{private}")
    } else {
        format!("{namespace}/{name}")
    };
    Ok(expanded)
}

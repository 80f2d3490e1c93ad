use crate::pos_infos::PosInfos;
use std::fmt::Display;

/// Builds the display string for a trace call.
///
/// Without position info the value is returned as-is. With it, the result is
/// `"<file>:<line>: <value>"` followed by `", <param>"` for every custom param.
pub fn format_output(value: impl Display, infos: Option<&PosInfos>) -> String {
    match infos {
        None => value.to_string(),
        Some(infos) => {
            let mut out = format!("{}:{}: {}", infos.file_name, infos.line_number, value);
            for param in infos.params() {
                out.push_str(", ");
                out.push_str(param);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_infos_is_plain_value() {
        assert_eq!(format_output("hello", None), "hello");
        assert_eq!(format_output(42, None), "42");
        assert_eq!(format_output("", None), "");
    }

    #[test]
    fn file_and_line_prefix() {
        let infos = PosInfos::new("main.hx", 10);
        assert_eq!(format_output(42, Some(&infos)), "main.hx:10: 42");
    }

    #[test]
    fn custom_params_are_appended_in_order() {
        let infos = PosInfos::new("a.hx", 1).with_params(["y", "z"]);
        assert_eq!(format_output("x", Some(&infos)), "a.hx:1: x, y, z");
    }

    #[test]
    fn empty_custom_params_add_no_suffix() {
        let infos = PosInfos::new("a.hx", 1).with_params(Vec::<&str>::new());
        assert_eq!(format_output("x", Some(&infos)), "a.hx:1: x");
    }

    #[test]
    fn module_and_function_are_not_printed() {
        let infos = PosInfos::new("lib.rs", 7)
            .with_module("demo::player")
            .with_function("update");
        assert_eq!(format_output("jump", Some(&infos)), "lib.rs:7: jump");
    }

    #[test]
    fn param_text_is_kept_verbatim() {
        let infos = PosInfos::new("a.rs", 3).with_param(", ").with_param("");
        assert_eq!(format_output("v", Some(&infos)), "a.rs:3: v, , , ");
    }
}

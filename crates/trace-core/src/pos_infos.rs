use std::fmt::Display;

/// Call-site metadata attached to a single trace call.
///
/// Built at the call site (usually through [`pos_infos!`](crate::pos_infos!)),
/// read by the formatter, then dropped once the call returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PosInfos {
    pub file_name: String,
    pub line_number: u32,

    // Carried for handlers; never part of the formatted output
    pub module_path: Option<String>,
    pub function_name: Option<String>,

    /// Extra values passed alongside the primary message, already stringified.
    pub custom_params: Option<Vec<String>>,
}

impl PosInfos {
    pub fn new(file_name: impl Into<String>, line_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
            ..Default::default()
        }
    }

    pub fn with_module(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }

    pub fn with_function(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = Some(function_name.into());
        self
    }

    /// Appends one extra value, keeping call order.
    pub fn with_param(mut self, param: impl Display) -> Self {
        self.custom_params
            .get_or_insert_with(Vec::new)
            .push(param.to_string());
        self
    }

    pub fn with_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let list = self.custom_params.get_or_insert_with(Vec::new);
        list.extend(params.into_iter().map(|p| p.to_string()));
        self
    }

    /// Extra values in call order; empty when none were attached.
    pub fn params(&self) -> &[String] {
        self.custom_params.as_deref().unwrap_or(&[])
    }
}

/// Captures the current file, line and module as [`PosInfos`], with optional
/// extra params.
///
/// ```rust
/// use trace_core::pos_infos;
///
/// let infos = pos_infos!("y", 3);
/// assert_eq!(infos.params(), ["y", "3"]);
/// ```
#[macro_export]
macro_rules! pos_infos {
    () => {
        $crate::pos_infos::PosInfos::new(file!(), line!()).with_module(module_path!())
    };
    ($($param:expr),+ $(,)?) => {
        $crate::pos_infos!()$(.with_param(&$param))+
    };
}

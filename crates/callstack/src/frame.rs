//! crates/callstack/src/frame.rs
//! Call-frame snapshots and caller-label rendering.

use std::fmt;
use std::panic::Location;

/// How a function was invoked, rendered as the separator between the owner
/// type and the function name in a caller label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CallOperator {
    /// Instance method call, rendered as `"."`.
    Instance,
    /// Associated (static) call, rendered as `"::"`.
    Static,
}

impl CallOperator {
    /// Returns the separator token placed between owner and function name.
    ///
    /// # Examples
    ///
    /// ```
    /// use callstack::CallOperator;
    ///
    /// assert_eq!(CallOperator::Instance.as_str(), ".");
    /// assert_eq!(CallOperator::Static.as_str(), "::");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instance => ".",
            Self::Static => "::",
        }
    }
}

impl fmt::Display for CallOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one registered scope.
///
/// A frame is captured at the moment a scope registers with the thread-local
/// registry and lives only as long as attribution needs it; nothing persists
/// a frame beyond the formatting of a single message. Argument values are
/// only present when the scope opted in at registration, since rendering
/// arguments is the expensive path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    owner: Option<String>,
    operator: CallOperator,
    function: String,
    file: &'static str,
    line: u32,
    args: Option<Vec<String>>,
}

impl CallFrame {
    /// Creates a frame for a free function with no owner type.
    ///
    /// The source location is taken from the construction site.
    #[must_use]
    #[track_caller]
    pub fn function(function: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            owner: None,
            operator: CallOperator::Instance,
            function: function.into(),
            file: location.file(),
            line: location.line(),
            args: None,
        }
    }

    /// Creates a frame for an instance method on `owner`.
    #[must_use]
    #[track_caller]
    pub fn method(owner: impl Into<String>, function: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            owner: Some(owner.into()),
            operator: CallOperator::Instance,
            function: function.into(),
            file: location.file(),
            line: location.line(),
            args: None,
        }
    }

    /// Creates a frame for an associated (static) call on `owner`.
    #[must_use]
    #[track_caller]
    pub fn static_method(owner: impl Into<String>, function: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            owner: Some(owner.into()),
            operator: CallOperator::Static,
            function: function.into(),
            file: location.file(),
            line: location.line(),
            args: None,
        }
    }

    /// Attaches rendered argument values to the frame.
    ///
    /// Arguments are opt-in: entry-record logging only prints them when the
    /// scope chose to pay for capturing them here.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = Some(args);
        self
    }

    /// Returns the owner type name, if the scope belongs to one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the call operator separating owner and function in the label.
    #[must_use]
    pub const fn operator(&self) -> CallOperator {
        self.operator
    }

    /// Returns the function or method name.
    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function
    }

    /// Returns the source file the frame was constructed in.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the source line the frame was constructed on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the rendered argument values, when the scope captured them.
    #[must_use]
    pub fn args(&self) -> Option<&[String]> {
        self.args.as_deref()
    }

    /// Renders the caller label attributed to log lines.
    ///
    /// With an owner type the label is `Owner<sep>function`. Without one the
    /// label degrades to the bare function name behind a single leading
    /// space, keeping the label column aligned across mixed output.
    ///
    /// # Examples
    ///
    /// ```
    /// use callstack::CallFrame;
    ///
    /// assert_eq!(CallFrame::method("Foo", "bar").label(), "Foo.bar");
    /// assert_eq!(CallFrame::static_method("Foo", "now").label(), "Foo::now");
    /// assert_eq!(CallFrame::function("bar").label(), " bar");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{owner}{}{}", self.operator, self.function),
            None => format!(" {}", self.function),
        }
    }
}

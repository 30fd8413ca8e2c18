//! Class name composition for the web target

/// Join class names with single spaces, skipping `None` and blank entries
pub fn clsx<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for class in classes.into_iter().flatten() {
        let class = class.trim();
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Incrementally built class list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class
    pub fn add(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a class when `condition` holds
    pub fn add_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    /// Add an optional class
    pub fn add_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    /// Render as a `class` attribute value
    pub fn build(&self) -> String {
        clsx(self.classes.iter().map(|c| Some(c.as_str())))
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

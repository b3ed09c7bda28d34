/// The include that already provides the common engine forward declarations.
pub const BUILTIN_UMBRELLA_HEADER: &str = "#include <js/TypeDecls.h>";

/// Forward declarations the umbrella header provides.
pub static BUILTIN_FORWARD_DECLS: &[&str] = &[
    "class JSAtom;",
    "struct JSContext;",
    "struct JSClass;",
    "class JSFunction;",
    "class JSFreeOp;",
    "class JSObject;",
    "struct JSRuntime;",
    "class JSScript;",
    "class JSString;",
    "namespace js { class TempAllocPolicy; }",
    "namespace JS { struct PropertyKey; }",
    "namespace JS { class Symbol; }",
    "namespace JS { class BigInt; }",
    "namespace JS { class Value; }",
    "namespace JS { class Compartment; }",
    "namespace JS { class Realm; }",
    "namespace JS { struct Runtime; }",
    "namespace JS { class Zone; }",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmbrellaHeader {
    pub header: String,
    forward_decls: Vec<String>,
}

impl UmbrellaHeader {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            forward_decls: Vec::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut umbrella = Self::new(BUILTIN_UMBRELLA_HEADER);
        umbrella.extend(BUILTIN_FORWARD_DECLS.iter().map(|d| d.to_string()));
        umbrella
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = String>) {
        for decl in decls {
            if !self.forward_decls.contains(&decl) {
                self.forward_decls.push(decl);
            }
        }
    }

    /// True if `directive` is one of the forward declarations this header provides.
    pub fn covers(&self, directive: &str) -> bool {
        self.forward_decls.iter().any(|d| d == directive)
    }

    pub fn forward_decls(&self) -> &[String] {
        &self.forward_decls
    }
}

//! Code block nodes and the highlighter language catalogue.

use serde::{Deserialize, Serialize};

/// A block of source code, highlighted client-side by the external
/// highlighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Raw source text
    pub code: String,

    /// Highlighter language tag (e.g. `"rust"`, `"ts"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Prefix every line with a 1-indexed line number
    #[serde(default)]
    pub show_line_numbers: bool,

    /// File name shown above the code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl CodeBlock {
    /// Create a code block without a language.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            id: None,
            class_name: None,
            code: code.into(),
            language: None,
            show_line_numbers: false,
            file_name: None,
        }
    }

    /// Set the language tag. Tags outside [`KNOWN_LANGUAGES`] are kept as-is.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        if !is_known_language(&language) {
            log::debug!("Code block language '{}' is not a known highlighter tag", language);
        }
        self.language = Some(language);
        self
    }

    /// Enable line numbers.
    pub fn with_line_numbers(mut self) -> Self {
        self.show_line_numbers = true;
        self
    }

    /// Set the file name label.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Number of lines in the code.
    pub fn line_count(&self) -> usize {
        self.code.split('\n').count()
    }
}

/// Check whether a tag is one of the highlighter's language names or aliases.
pub fn is_known_language(tag: &str) -> bool {
    KNOWN_LANGUAGES.binary_search(&tag).is_ok()
}

/// Language names and aliases understood by the highlighter, sorted.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "abap", "abnf", "ada", "adoc", "ahk", "al", "antlr4", "apache", "apex", "apl",
    "applescript", "aql", "arduino", "arff", "asciidoc", "asm", "asm6502", "aspnet", "assembly",
    "autohotkey", "autoit", "avisynth", "avro-idl", "avs", "bash", "basic", "bbcode", "bnf",
    "brainfuck", "bro", "c", "c#", "c++", "c-al", "cil", "clike", "clojure", "cmake", "cnc",
    "cobol", "coffee", "coffeescript", "concurnas", "conf", "cpp", "crystal", "csharp", "csp",
    "css", "css-extras", "csv", "cypher", "d", "dart", "dataweave", "dax", "dhall", "diff",
    "django", "dns-zone", "dns-zone-file", "docker", "dockerfile", "dot", "ebnf",
    "editorconfig", "ejs", "elixir", "elm", "emacs", "erb", "erlang", "etlua", "excel-formula",
    "factor", "firestore-security-rules", "fortran", "fsharp", "ftl", "g4", "gamemakerlanguage",
    "gap", "gcode", "gdscript", "gedcom", "gherkin", "git", "gitignore", "glsl", "gml", "go",
    "go-mod", "go-module", "graphql", "groovy", "haml", "handlebars", "haskell", "haxe", "hbs",
    "hcl", "hgignore", "hlsl", "hoon", "hpkp", "hsts", "html", "http", "ichigojam", "icon",
    "icu-message-format", "idl", "idr", "idris", "iecst", "ignore", "inform7", "ini", "ino",
    "io", "j", "java", "javadoc", "javadoclike", "javascript", "javastacktrace", "jexl",
    "jolie", "jq", "js", "js-extras", "jsdoc", "json", "json5", "jsonp", "jsstacktrace", "jsx",
    "julia", "k", "kdb", "keepalived", "keyman", "kotlin", "kumir", "kusto", "latex", "latte",
    "less", "lilypond", "liquid", "lisp", "livescript", "llvm", "log", "lolcode", "lua",
    "magma", "makefile", "markdown", "markup-templating", "matlab", "md", "mel", "mermaid",
    "mizar", "mongodb", "monkey", "moonscript", "mscript", "n1ql", "n4js", "nand2tetris-hdl",
    "nani", "naniscript", "nasm", "neon", "nginx", "nim", "nix", "npmignore", "nsis", "objc",
    "objectivec", "ocaml", "opencl", "openqasm", "oz", "parigp", "parser", "pascal",
    "pascaligo", "pcaxis", "pcode", "peoplecode", "perl", "php", "php-extras", "plsql",
    "powerquery", "powershell", "pq", "processing", "prolog", "promql", "properties",
    "protobuf", "ps1", "pug", "puppet", "pure", "purebasic", "purescript", "py", "python", "q",
    "qasm", "qml", "qore", "qsharp", "r", "racket", "ramda", "rascal", "rb", "re", "react",
    "react-ts", "reason", "regex", "rego", "renpy", "rest", "rip", "roboconf", "robot",
    "robotframework", "rq", "rs", "ruby", "rust", "sas", "sass", "scala", "scheme", "scss",
    "shell", "shell-session", "sln", "smali", "smalltalk", "smarty", "sml", "solidity",
    "solution-file", "soy", "sparql", "splunk-spl", "sqf", "sql", "squirrel", "stan", "stylus",
    "swift", "t4", "t4-cs", "t4-vb", "tap", "tcl", "textile", "toml", "tremor", "ts", "tsx",
    "tt2", "ttcn", "ttcn3", "ttl", "turtle", "twig", "typescript", "typoscript", "uc",
    "unity3dasset", "unrealscript", "v", "vb", "vba", "vbnet", "velocity", "verilog", "vhdl",
    "vim", "visual-basic", "vue", "warpscript", "wasm", "web-idl", "webassembly", "webidl",
    "winstone", "xls", "xlsx", "xml", "xml-doc", "xojo", "xquery", "yaml", "yang", "zig",
];

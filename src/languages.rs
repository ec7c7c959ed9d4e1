//! Code-block language registry.
//!
//! Maps lower-cased language ids to display names. The parser only uses it to
//! decide whether the first line of a fenced block is a language header.

use std::collections::BTreeMap;

/// Built-in language ids, sorted by id for binary search.
static BUILTIN: &[(&str, &str)] = &[
    ("1c", "1C:Enterprise"),
    ("abnf", "ABNF"),
    ("accesslog", "Access Log"),
    ("actionscript", "ActionScript"),
    ("ada", "Ada"),
    ("angelscript", "AngelScript"),
    ("apache", "Apache"),
    ("applescript", "AppleScript"),
    ("arcade", "ArcGIS Arcade"),
    ("arduino", "Arduino"),
    ("armasm", "ARM Assembly"),
    ("asciidoc", "AsciiDoc"),
    ("aspectj", "AspectJ"),
    ("autohotkey", "AutoHotkey"),
    ("autoit", "AutoIt"),
    ("avrasm", "AVR Assembly"),
    ("awk", "Awk"),
    ("axapta", "X++"),
    ("bash", "Bash"),
    ("basic", "BASIC"),
    ("bat", "Batch file (DOS)"),
    ("bnf", "BNF"),
    ("brainfuck", "Brainfuck"),
    ("c", "C"),
    ("c++", "C++"),
    ("cal", "C/AL"),
    ("capnproto", "Cap'n Proto"),
    ("cc", "C++"),
    ("ceylon", "Ceylon"),
    ("clean", "Clean"),
    ("clj", "Clojure"),
    ("clojure", "Clojure"),
    ("clojure-repl", "Clojure REPL"),
    ("cmake", "CMake"),
    ("cmd", "Batch file (DOS)"),
    ("coffee", "CoffeeScript"),
    ("coffeescript", "CoffeeScript"),
    ("console", "Console"),
    ("coq", "Coq"),
    ("cos", "Caché Object Script"),
    ("cpp", "C++"),
    ("crmsh", "crmsh"),
    ("crystal", "Crystal"),
    ("cs", "C#"),
    ("csharp", "C#"),
    ("csp", "CSP"),
    ("css", "CSS"),
    ("d", "D"),
    ("dart", "Dart"),
    ("delphi", "Delphi"),
    ("diff", "Diff"),
    ("django", "Django"),
    ("dns", "DNS Zone"),
    ("docker", "Dockerfile"),
    ("dockerfile", "Dockerfile"),
    ("dos", "Batch file (DOS)"),
    ("dsconfig", "dsconfig"),
    ("dts", "Device Tree"),
    ("dust", "Dust"),
    ("ebnf", "EBNF"),
    ("elixir", "Elixir"),
    ("elm", "Elm"),
    ("erb", "ERB"),
    ("erl", "Erlang"),
    ("erlang", "Erlang"),
    ("erlang-repl", "Erlang REPL"),
    ("ex", "Elixir"),
    ("excel", "Excel"),
    ("exs", "Elixir"),
    ("fish", "Fish"),
    ("fix", "FIX"),
    ("flix", "Flix"),
    ("fortran", "Fortran"),
    ("fsharp", "F#"),
    ("gams", "GAMS"),
    ("gauss", "GAUSS"),
    ("gcode", "G-code"),
    ("gherkin", "Gherkin"),
    ("glsl", "GLSL"),
    ("gml", "GML"),
    ("go", "Go"),
    ("golang", "Go"),
    ("golo", "Golo"),
    ("gql", "GraphQL"),
    ("gradle", "Gradle"),
    ("graphql", "GraphQL"),
    ("groovy", "Groovy"),
    ("h", "C"),
    ("haml", "Haml"),
    ("handlebars", "Handlebars"),
    ("haskell", "Haskell"),
    ("haxe", "Haxe"),
    ("hpp", "C++"),
    ("hs", "Haskell"),
    ("hsp", "HSP"),
    ("html", "HTML"),
    ("http", "HTTP"),
    ("hy", "Hy"),
    ("inform7", "Inform 7"),
    ("ini", "INI"),
    ("irpf90", "IRPF90"),
    ("isbl", "ISBL"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("jboss-cli", "JBoss CLI"),
    ("jl", "Julia"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("jsx", "JSX"),
    ("julia", "Julia"),
    ("julia-repl", "Julia REPL"),
    ("kotlin", "Kotlin"),
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("lasso", "Lasso"),
    ("latex", "LaTeX"),
    ("ldif", "LDIF"),
    ("leaf", "Leaf"),
    ("less", "Less"),
    ("lisp", "Lisp"),
    ("livecodeserver", "LiveCode"),
    ("livescript", "LiveScript"),
    ("llvm", "LLVM IR"),
    ("lsl", "LSL"),
    ("lua", "Lua"),
    ("m", "Objective-C"),
    ("makefile", "Makefile"),
    ("markdown", "Markdown"),
    ("mathematica", "Mathematica"),
    ("matlab", "MATLAB"),
    ("maxima", "Maxima"),
    ("md", "Markdown"),
    ("mel", "MEL"),
    ("mercury", "Mercury"),
    ("mipsasm", "MIPS Assembly"),
    ("mizar", "Mizar"),
    ("mk", "Makefile"),
    ("ml", "OCaml"),
    ("mm", "Objective-C++"),
    ("mojolicious", "Mojolicious"),
    ("monkey", "Monkey"),
    ("moonscript", "MoonScript"),
    ("n1ql", "N1QL"),
    ("nestedtext", "NestedText"),
    ("nginx", "Nginx"),
    ("nginxconf", "Nginx"),
    ("nim", "Nim"),
    ("nix", "Nix"),
    ("node-repl", "Node REPL"),
    ("nsis", "NSIS"),
    ("objc", "Objective-C"),
    ("objectivec", "Objective-C"),
    ("ocaml", "OCaml"),
    ("openscad", "OpenSCAD"),
    ("oxygene", "Oxygene"),
    ("parser3", "Parser3"),
    ("patch", "Diff"),
    ("perl", "Perl"),
    ("pf", "PF"),
    ("pgsql", "PostgreSQL"),
    ("php", "PHP"),
    ("php-template", "PHP Template"),
    ("pl", "Perl"),
    ("plaintext", "Plain Text"),
    ("pony", "Pony"),
    ("postgres", "PostgreSQL"),
    ("postgresql", "PostgreSQL"),
    ("powershell", "PowerShell"),
    ("processing", "Processing"),
    ("profile", "Python profiler"),
    ("prolog", "Prolog"),
    ("properties", "Properties"),
    ("proto", "Protocol Buffers"),
    ("protobuf", "Protocol Buffers"),
    ("ps1", "PowerShell"),
    ("puppet", "Puppet"),
    ("purebasic", "PureBASIC"),
    ("py", "Python"),
    ("python", "Python"),
    ("python-repl", "Python REPL"),
    ("q", "Q"),
    ("qml", "QML"),
    ("r", "R"),
    ("rb", "Ruby"),
    ("reasonml", "ReasonML"),
    ("rib", "RenderMan RIB"),
    ("roboconf", "Roboconf"),
    ("routeros", "MikroTik RouterOS"),
    ("rs", "Rust"),
    ("rsl", "RenderMan RSL"),
    ("ruby", "Ruby"),
    ("ruleslanguage", "Oracle Rules Language"),
    ("rust", "Rust"),
    ("sas", "SAS"),
    ("scala", "Scala"),
    ("scheme", "Scheme"),
    ("scilab", "Scilab"),
    ("scm", "Scheme"),
    ("scss", "SCSS"),
    ("sh", "Shell"),
    ("shell", "Shell"),
    ("smali", "Smali"),
    ("smalltalk", "Smalltalk"),
    ("sml", "SML"),
    ("sol", "Solidity"),
    ("solidity", "Solidity"),
    ("sqf", "SQF"),
    ("sql", "SQL"),
    ("stan", "Stan"),
    ("stata", "Stata"),
    ("step21", "STEP Part 21"),
    ("stylus", "Stylus"),
    ("subunit", "SubUnit"),
    ("svelte", "Svelte"),
    ("svg", "SVG"),
    ("swift", "Swift"),
    ("taggerscript", "Tagger Script"),
    ("tap", "Test Anything Protocol"),
    ("tcl", "Tcl"),
    ("tex", "LaTeX"),
    ("text", "Plain Text"),
    ("thrift", "Thrift"),
    ("toml", "TOML"),
    ("tp", "TP"),
    ("ts", "TypeScript"),
    ("tsx", "TSX"),
    ("twig", "Twig"),
    ("txt", "Plain Text"),
    ("typescript", "TypeScript"),
    ("vala", "Vala"),
    ("vbnet", "VB.NET"),
    ("vbscript", "VBScript"),
    ("vbscript-html", "VBScript in HTML"),
    ("verilog", "Verilog"),
    ("vhdl", "VHDL"),
    ("vim", "Vim Script"),
    ("vue", "Vue"),
    ("wasm", "WebAssembly"),
    ("wren", "Wren"),
    ("x86asm", "x86 Assembly"),
    ("xl", "XL"),
    ("xml", "XML"),
    ("xquery", "XQuery"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("zephir", "Zephir"),
    ("zig", "Zig"),
    ("zsh", "Zsh"),
];

/// Display name of a built-in language id, if it is known.
pub fn pretty_language_name(id: &str) -> Option<&'static str> {
    BUILTIN
        .binary_search_by(|(name, _)| name.cmp(&id))
        .ok()
        .map(|index| BUILTIN[index].1)
}

/// Built-in languages plus any configured extras.
#[derive(Debug, Clone, Default)]
pub struct Languages {
    extra: BTreeMap<String, String>,
}

impl Languages {
    /// Only the built-in table.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in table extended with `extra`. Ids are lower-cased; extras win
    /// over built-in entries with the same id.
    pub fn with_extra(extra: &BTreeMap<String, String>) -> Self {
        let extra = extra
            .iter()
            .map(|(id, name)| (id.trim().to_lowercase(), name.clone()))
            .collect();
        Self { extra }
    }

    /// Display name for a lower-cased language id.
    pub fn pretty_name(&self, id: &str) -> Option<&str> {
        self.extra
            .get(id)
            .map(String::as_str)
            .or_else(|| pretty_language_name(id))
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.pretty_name(id).is_some()
    }
}

//! Doxygen markup normalization
//!
//! Turns raw comment text into a plain, single-line-escaped fragment by
//! literal substitution. The input corpus is informal and inconsistent, so
//! a fixed replacement table is used instead of a doxygen grammar: every
//! known command spelling maps to a readable label, everything unknown
//! passes through untouched.

/// Doxygen commands and their replacements, both `@cmd` and `\cmd`
/// spellings. `None` means the default rendering: capitalized command name
/// followed by a colon (`param` -> `Param:`).
///
/// Replacement is sequential substring substitution applied longest
/// spelling first, so a command is never rewritten by one of its own
/// prefixes (`param` by `par`, `endcode` by `e`).
///
/// Command list taken from the doxygen manual. Bare markup characters
/// (`$`, `@`, `\`, `&`, `~`, `<`, `>`, `#`, `%`) are deliberately absent
/// and pass through.
const COMMANDS: &[(&str, Option<&str>)] = &[
    ("addindex", None),
    ("addtogroup", None),
    ("anchor", None),
    ("arg", None),
    ("attention", None),
    ("author", None),
    ("bug", None),
    ("callgraph", None),
    ("callergraph", None),
    ("category", None),
    ("class", None),
    ("code", Some("[Code]")),
    ("cond", None),
    ("copybrief", None),
    ("copydetails", None),
    ("copydoc", None),
    ("date", None),
    ("def", None),
    ("defgroup", None),
    ("deprecated", None),
    ("details", None),
    ("dir", None),
    ("dontinclude", None),
    ("dot", Some("[Dot]")),
    ("dotfile", None),
    ("e", None),
    ("else", None),
    ("elseif", None),
    ("em", None),
    ("endcode", Some("[/Code]")),
    ("endcond", None),
    ("enddot", Some("[/Dot]")),
    ("endhtmlonly", None),
    ("endif", None),
    ("endlatexonly", None),
    ("endlink", None),
    ("endmanonly", None),
    ("endmsc", None),
    ("endverbatim", None),
    ("endxmlonly", None),
    ("enum", None),
    ("example", None),
    ("exception", None),
    ("extends", None),
    ("f$", None),
    ("f[", None),
    ("f]", None),
    ("f{", None),
    ("f}", None),
    ("file", None),
    ("headerfile", None),
    ("hideinitializer", None),
    ("htmlinclude", None),
    ("htmlonly", None),
    ("if", None),
    ("ifnot", None),
    ("image", None),
    ("implements", None),
    ("include", None),
    ("includelineno", None),
    ("ingroup", None),
    ("internal", None),
    ("invariant", None),
    ("interface", None),
    ("latexonly", None),
    ("li", None),
    ("line", None),
    ("link", None),
    ("mainpage", None),
    ("manonly", None),
    ("memberof", None),
    ("msc", None),
    ("name", None),
    ("namespace", None),
    ("nosubgrouping", None),
    ("note", None),
    ("overload", None),
    ("package", None),
    ("page", None),
    ("par", None),
    ("paragraph", None),
    ("param", None),
    ("post", None),
    ("pre", None),
    ("property", None),
    ("protocol", None),
    ("relates", None),
    ("relatesalso", None),
    ("remarks", None),
    ("return", None),
    ("retval", None),
    ("sa", None),
    ("section", None),
    ("see", None),
    ("showinitializer", None),
    ("since", None),
    ("skip", None),
    ("skipline", None),
    ("struct", None),
    ("subpage", None),
    ("subsection", None),
    ("subsubsection", None),
    ("test", None),
    ("throw", None),
    ("todo", Some("TODO")),
    ("tparam", None),
    ("typedef", None),
    ("union", None),
    ("until", None),
    ("var", None),
    ("verbatim", None),
    ("verbinclude", None),
    ("version", None),
    ("warning", None),
    ("weakgroup", None),
    ("xmlonly", None),
    ("xrefitem", None),
];

/// Tokens stripped outright before the command table runs: comment marker
/// characters, the brief/fn/ref tags whose labels add nothing, quote
/// characters (the output is embedded in a quoted literal), and the `\c`
/// typewriter-font escape.
const STRIPPED: &[&str] = &[
    "/", "*", "!", "\\brief", "@brief", "\\fn", "@fn", "\\ref", "@ref", "\"", "'", "\\c",
];

/// Normalize raw comment text to a plain escaped fragment.
///
/// Blank padding collapses away, comment markers and quotes are stripped,
/// and doxygen commands are rewritten to readable labels. Line breaks
/// inside the input become the literal two-character `\n` escape so the
/// result stays a single line.
pub fn clean(raw: &str) -> String {
    let mut text = raw
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\\n");

    for token in STRIPPED {
        text = text.replace(token, "");
    }

    // Longest spelling first; the sort is stable so equal-length entries
    // keep table order.
    let mut commands: Vec<&(&str, Option<&str>)> = COMMANDS.iter().collect();
    commands.sort_by_key(|(cmd, _)| std::cmp::Reverse(cmd.len()));

    for (cmd, repl) in commands {
        let label = match repl {
            Some(r) => (*r).to_string(),
            None => format!("{}:", capitalize(cmd)),
        };
        text = text.replace(&format!("@{cmd}"), &label);
        text = text.replace(&format!("\\{cmd}"), &label);
    }

    text.replace("*/", "").trim().to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

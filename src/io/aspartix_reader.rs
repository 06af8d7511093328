use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alnum:]][_[:alnum:]-]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\)\.\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\)\.\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\)\.\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\)\.\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const DEFAULT_ARG_LABELS_CAP: usize = 1 << 10;

const COMMENT_PREFIX: &str = "%";

type Warned<T> = (T, Vec<String>);

fn captured_arg(c: &Captures, i: usize) -> Warned<String> {
    let str_arg = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let trimmed_str_arg = str_arg.trim().to_string();
    if trimmed_str_arg.len() == str_arg.len() {
        (trimmed_str_arg, vec![])
    } else {
        (
            trimmed_str_arg,
            vec!["argument names beginning or ending by spaces may be ambiguous".to_string()],
        )
    }
}

fn try_read_arg_line(l: &str) -> Result<Option<Warned<String>>> {
    if !ARG_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1))),
        None => Err(anyhow!("invalid argument name in {}", l.trim())),
    }
}

fn try_read_att_line(l: &str) -> Result<Option<Warned<(String, String)>>> {
    if !ATT_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
        Some(c) => {
            let (from, mut warnings) = captured_arg(&c, 1);
            let (to, to_warnings) = captured_arg(&c, 2);
            warnings.extend(to_warnings);
            Ok(Some(((from, to), warnings)))
        }
        None => Err(anyhow!("invalid argument names in {}", l.trim())),
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// % a comment
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// Argument names are made of letters, digits, underscores and dashes.
/// All the arguments must be declared before the first attack.
/// Empty lines and lines beginning with `%` are ignored.
/// An attack given twice raises a warning and is counted once.
///
/// # Example
///
/// ```
/// # use argprov::aa::AAFramework;
/// # use argprov::io::{AspartixReader, InstanceReader};
/// let af = AspartixReader::default().read(&mut "arg(a).\narg(b).\natt(a,b).".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line_index: usize, warnings: Vec<String>) {
        for w in warnings {
            self.warning_handlers
                .iter()
                .for_each(|h| (h)(1 + line_index, w.clone()));
        }
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = Vec::with_capacity(DEFAULT_ARG_LABELS_CAP);
        let mut af: Option<AAFramework<String>> = None;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() || l.trim_start().starts_with(COMMENT_PREFIX) {
                continue;
            }
            if let Some((a, warnings)) = try_read_arg_line(l).with_context(context)? {
                if af.is_some() {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                self.warn(i, warnings);
                arg_labels.push(a);
                continue;
            }
            if let Some(((a, b), warnings)) = try_read_att_line(l).with_context(context)? {
                self.warn(i, warnings);
                let mut framework = match af.take() {
                    Some(f) => f,
                    None => AAFramework::new_with_argument_set(
                        ArgumentSet::new_with_labels(&arg_labels).with_context(context)?,
                    ),
                };
                if !framework.new_attack(&a, &b).with_context(context)? {
                    self.warn(i, vec![format!("duplicate attack from {} to {}", a, b)]);
                }
                af = Some(framework);
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        match af {
            Some(a) => Ok(a),
            None => Ok(AAFramework::new_with_argument_set(
                ArgumentSet::new_with_labels(&arg_labels)
                    .context("while building the argument set")?,
            )),
        }
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        specs::find_argument(af, arg)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_arg_line_pattern_ok() {
        assert!(ARG_LINE_PATTERN.is_match("arg(a)."));
        assert!(ARG_LINE_PATTERN.is_match("    arg(a).   "));
        assert!(ARG_LINE_PATTERN.is_match("arg(1a. )."));
    }

    const WRONG_ARG_LINES: [&str; 7] = [
        "rg(a).",
        "arg(a)",
        "arg().",
        "arga).",
        "arg(a.",
        "arg(a).arg(b).",
        "arg(a);",
    ];

    #[test]
    fn test_arg_line_pattern_not_ok() {
        WRONG_ARG_LINES
            .iter()
            .for_each(|p| assert!(!ARG_LINE_PATTERN.is_match(p)))
    }

    #[test]
    fn test_try_read_arg_line_ok() {
        let assert_arg_name = |expected: &str, actual: &str, n_warnings: usize| {
            let (name, warnings) = try_read_arg_line(actual).unwrap().unwrap();
            assert_eq!(expected, name);
            assert_eq!(n_warnings, warnings.len());
        };
        assert_arg_name("a", "arg(a).", 0);
        assert_arg_name("a", "arg( a).", 1);
        assert_arg_name("a", "arg(a ).", 1);
        assert_arg_name("a", "    arg(a).   ", 0);
        assert_arg_name("_a", "arg(_a).", 0);
        assert_arg_name("a1_", "arg(a1_).", 0);
        assert_arg_name("1a", "arg(1a).", 0);
        assert_arg_name("claim-2", "arg(claim-2).", 0);
    }

    #[test]
    fn test_try_read_arg_line_wrong_name() {
        ["arg(a.).", "arg(-a).", "arg(a b)."].iter().for_each(|l| {
            assert!(try_read_arg_line(l).is_err());
        });
    }

    #[test]
    fn test_try_read_arg_line_wrong_line_pattern() {
        WRONG_ARG_LINES.iter().for_each(|p| {
            assert!(try_read_arg_line(p).unwrap().is_none());
        });
    }

    const WRONG_ATT_LINES: [&str; 8] = [
        "tt(a,b).",
        "att(a,b)",
        "att().",
        "att(a,).",
        "att(,b).",
        "atta,b).",
        "att(a,b.",
        "att(a,b).att(c,d).",
    ];

    #[test]
    fn test_att_line_pattern_not_ok() {
        WRONG_ATT_LINES
            .iter()
            .for_each(|p| assert!(!ATT_LINE_PATTERN.is_match(p)))
    }

    #[test]
    fn test_try_read_att_line_ok() {
        let assert_att_names = |from: &str, to: &str, actual: &str, n_warnings: usize| {
            let ((a, b), warnings) = try_read_att_line(actual).unwrap().unwrap();
            assert_eq!((from, to), (a.as_str(), b.as_str()));
            assert_eq!(n_warnings, warnings.len());
        };
        assert_att_names("a", "b", "att(a,b).", 0);
        assert_att_names("a", "b", "att( a,b).", 1);
        assert_att_names("a", "b", "att( a , b ).", 2);
        assert_att_names("a", "b", "    att(a,b).   ", 0);
        assert_att_names("a1_", "b-2", "att(a1_,b-2).", 0);
    }

    #[test]
    fn test_try_read_att_line_wrong_name() {
        ["att(a.,b).", "att(a,b.).", "att(a b,c)."]
            .iter()
            .for_each(|l| {
                assert!(try_read_att_line(l).is_err());
            });
    }

    fn str_args(af: &AAFramework<String>) -> Vec<String> {
        af.argument_set().iter().map(|s| format!("{}", s)).collect()
    }

    fn str_attacks(af: &AAFramework<String>) -> Vec<String> {
        af.iter_attacks()
            .map(|a| format!("({},{})", a.attacker(), a.attacked()))
            .collect()
    }

    #[test]
    fn test_read_ok() {
        let instance = "% a comment\narg(a).\n\narg(b).\natt(a,b).\n";
        let af = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(vec!["a", "b"], str_args(&af));
        assert_eq!(vec!["(a,b)"], str_attacks(&af));
    }

    #[test]
    fn test_read_no_attacks() {
        let af = AspartixReader::default()
            .read(&mut "arg(a).\narg(b).\n".as_bytes())
            .unwrap();
        assert_eq!(vec!["a", "b"], str_args(&af));
        assert!(str_attacks(&af).is_empty());
    }

    #[test]
    fn test_read_empty() {
        let af = AspartixReader::default().read(&mut "".as_bytes()).unwrap();
        assert_eq!(0, af.n_arguments());
    }

    #[test]
    fn test_read_arg_after_attack() {
        let instance = "arg(a).\narg(b).\natt(a,b).\narg(c).\n";
        assert!(AspartixReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_unknown_argument() {
        let instance = "arg(a).\natt(a,b).\n";
        assert!(AspartixReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_duplicate_argument() {
        let instance = "arg(a).\narg(a).\natt(a,a).\n";
        assert!(AspartixReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
        assert!(AspartixReader::default()
            .read(&mut "arg(a).\narg(a).\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_syntax_error() {
        assert!(AspartixReader::default()
            .read(&mut "arg(a).\nfoo\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_warnings() {
        let warnings = Rc::new(RefCell::new(vec![]));
        let mut reader = AspartixReader::default();
        let handler_warnings = Rc::clone(&warnings);
        reader.add_warning_handler(Box::new(move |line: usize, w: String| {
            handler_warnings.borrow_mut().push((line, w))
        }));
        let instance = "arg(a).\narg( b).\natt(a,b).\natt(a,b).\n";
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!(1, af.n_attacks());
        let warnings = warnings.borrow();
        assert_eq!(2, warnings.len());
        assert_eq!(2, warnings[0].0);
        assert_eq!(4, warnings[1].0);
        assert_eq!("duplicate attack from a to b", warnings[1].1);
    }

    #[test]
    fn test_read_arg_from_str() {
        let reader = AspartixReader::default();
        let af = reader.read(&mut "arg(a).\n".as_bytes()).unwrap();
        assert_eq!("a", reader.read_arg_from_str(&af, "a").unwrap().label());
        assert!(reader.read_arg_from_str(&af, "b").is_err());
    }
}

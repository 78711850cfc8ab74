use anyhow::{Context, Result};
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use pasgen::{Field, Policy, kdf, validate};
use rpassword::read_password;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use zeroize::Zeroizing;

pub const MIN_SAFE_KEYSPACE_BITS: f64 = 100.0;
pub const MIN_SAFE_LENGTH: usize = 16;

pub const PROMPT_MARKER: &str = "-";

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect() -> Self {
        Self {
            unicode_support: supports_unicode::on(supports_unicode::Stream::Stderr),
            color_support: supports_color::on(supports_color::Stream::Stderr).is_some(),
        }
    }

    fn style(&self, secure: bool) -> Style {
        if !self.color_support {
            Style::new()
        } else if secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    }

    fn branches(&self) -> (&'static str, &'static str) {
        if self.unicode_support {
            ("├─", "└─")
        } else {
            ("|-", "`-")
        }
    }
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

pub fn read_secret(raw: &OsStr, field: Field) -> Result<Zeroizing<String>> {
    if raw != PROMPT_MARKER {
        let text = validate::text_input(raw, field)?;
        return Ok(Zeroizing::new(text.to_string()));
    }

    let mut stderr = io::stderr();
    write!(stderr, "{}: ", capitalize(&field.to_string()))?;
    stderr.flush()?;

    let secret = read_password().with_context(|| format!("Failed to read {}", field))?;
    Ok(Zeroizing::new(secret))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn show_progress<F, T>(unicode_support: bool, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let term = Term::stderr();
    term.hide_cursor().ok();

    let ticks: &[&str] = if unicode_support {
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]
    } else {
        &["-", "\\", "|", "/", "-"]
    };
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(ticks);

    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message("Stretching key...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    spinner.finish_and_clear();
    term.show_cursor().ok();

    result.map(|r| (r, elapsed))
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn format_coverage(policy: &Policy) -> String {
    policy
        .coverage()
        .iter()
        .map(|entry| {
            entry
                .iter()
                .map(|class| class.name())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_report(policy: &Policy, length: usize, elapsed: Duration, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (mid, last) = options.branches();

    let alphabet_size = policy.alphabet().len();
    let keyspace = pasgen::entropy_bits(length, alphabet_size);
    let keyspace_secure = keyspace >= MIN_SAFE_KEYSPACE_BITS;
    let length_secure = length >= MIN_SAFE_LENGTH;

    let keyspace_style = options.style(keyspace_secure);
    let length_style = options.style(length_secure);

    eprintln!();
    eprintln!("Settings:");
    eprintln!(
        "  {} KDF        PBKDF2-HMAC-SHA512 (i={})",
        mid,
        kdf::ITERATIONS
    );
    eprintln!("  {} Prefix     {}", mid, kdf::SALT_PREFIX);
    eprintln!(
        "  {} Policy     {} ({} {})",
        mid,
        policy.name(),
        policy.class_count(),
        plural(policy.class_count(), "class", "classes")
    );
    eprintln!("  {} Coverage   {}", last, format_coverage(policy));
    eprintln!();

    eprintln!("Stats:");
    eprintln!(
        "  {} Length     {} {} {}",
        mid,
        length_style.apply_to(format!(
            "[{}]",
            if length_secure { check_ok } else { check_warn }
        )),
        length_style.apply_to(length),
        plural(length, "char", "chars")
    );
    eprintln!("  {} Charset    {} chars", mid, alphabet_size);
    eprintln!(
        "  {} Keyspace   {} {} bits",
        mid,
        keyspace_style.apply_to(format!(
            "[{}]",
            if keyspace_secure { check_ok } else { check_warn }
        )),
        keyspace_style.apply_to(format!("{:.1}", keyspace))
    );
    eprintln!("  {} Time       {:.1}s", last, elapsed.as_secs_f64());
}

pub fn display_policies(options: &DisplayOptions) {
    let (mid, last) = options.branches();
    let bold = if options.color_support {
        Style::new().bold()
    } else {
        Style::new()
    };

    for (i, policy) in Policy::all().iter().enumerate() {
        if i > 0 {
            println!();
        }
        let default_marker = if policy.name() == pasgen::DEFAULT_POLICY {
            " (default)"
        } else {
            ""
        };
        println!("{}{}", bold.apply_to(policy.name()), default_marker);
        println!(
            "  {} Classes    {}",
            mid,
            policy
                .classes()
                .iter()
                .map(|class| class.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("  {} Charset    {} chars", mid, policy.alphabet().len());
        println!("  {} Coverage   {}", last, format_coverage(policy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_read_secret_passthrough() {
        let secret = read_secret(OsStr::new("TestPass123!"), Field::Password).unwrap();
        assert_eq!(secret.as_str(), "TestPass123!");
    }

    #[cfg(unix)]
    #[test]
    fn test_read_secret_rejects_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let err = read_secret(OsStr::from_bytes(b"salt\xff1234"), Field::Salt).unwrap_err();
        let derive = err.downcast_ref::<pasgen::DeriveError>().unwrap();
        assert!(derive.is_input_error());
    }

    #[test]
    fn test_format_coverage() {
        assert_eq!(
            format_coverage(Policy::lookup("base").unwrap()),
            "lower, upper, numeric"
        );
        assert_eq!(
            format_coverage(Policy::lookup("specialAdvanced").unwrap()),
            "lower, upper, numeric, specialSimple|specialAdvanced"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("password"), "Password");
        assert_eq!(capitalize("salt"), "Salt");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "char", "chars"), "char");
        assert_eq!(plural(0, "char", "chars"), "chars");
        assert_eq!(plural(16, "class", "classes"), "classes");
    }

    #[test]
    fn test_style_without_color_is_plain() {
        let options = DisplayOptions {
            unicode_support: false,
            color_support: false,
        };
        assert_eq!(options.style(true).apply_to("x").to_string(), "x");
        assert_eq!(options.branches(), ("|-", "`-"));
    }
}

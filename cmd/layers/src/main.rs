//! Layered error demo for cerror
//!
//! A tiny account store behind a service and a request handler. Each layer
//! wraps the error from below with its own category and message; the handler
//! maps the category to a status code without looking at message text.
//!
//! # Environment Variables
//!
//! - `CERROR_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `CERROR_FLUSH_EPRINT=1` - Flush stderr after every line
//! - `LAYERS_ADMIN_TOKEN=<token>` - Token accepted for the admin request (default: "s3cret")

use std::collections::BTreeMap;
use std::error::Error as StdError;

use cerror::{ensure, error_type_of, kdebug, kinfo, kwarn, newf, wrapf};
use cerror::{CResult, Error, ErrorType, ResultExt, VALIDATION_ERROR_MESSAGE};

// CERROR_LOG_LEVEL=debug cargo run -p cerror-layers

// ── Repository ────────────────────────────────────────────────────

struct AccountRepo {
    accounts: BTreeMap<u32, String>,
}

impl AccountRepo {
    fn new() -> Self {
        let mut accounts = BTreeMap::new();
        accounts.insert(1, "ada".to_string());
        accounts.insert(2, "grace".to_string());
        Self { accounts }
    }

    fn get(&self, id: u32) -> CResult<&str> {
        match self.accounts.get(&id) {
            Some(name) => Ok(name),
            None => Err(newf!(ErrorType::NOT_FOUND, "account {} not found", id)
                .with_context("table", "accounts")),
        }
    }

    fn insert(&mut self, id: u32, name: &str) -> CResult<()> {
        if self.accounts.contains_key(&id) {
            return Err(newf!(ErrorType::ALREADY_EXIST, "account {} exists", id)
                .with_context("table", "accounts"));
        }
        self.accounts.insert(id, name.to_string());
        Ok(())
    }
}

// ── Service ───────────────────────────────────────────────────────

struct AccountService {
    repo: AccountRepo,
    admin_token: String,
}

impl AccountService {
    fn display_name(&self, id: u32) -> CResult<String> {
        let name = self
            .repo
            .get(id)
            .wrap_err_with(ErrorType::INTERNAL, || format!("loading profile {}", id))?;
        Ok(name.to_uppercase())
    }

    fn register(&mut self, token: &str, id: u32, name: &str) -> CResult<()> {
        if token != self.admin_token {
            return Err(ErrorType::UNAUTHORIZED.new("bad admin token"));
        }
        validate_name(name)?;
        self.repo
            .insert(id, name)
            .map_err(|e| wrapf!(e, ErrorType::INTERNAL, "registering {}", name))
    }
}

fn validate_name(name: &str) -> CResult<()> {
    let mut problems = Vec::new();
    if name.is_empty() {
        problems.push(("name", "must not be empty"));
    }
    if name.chars().any(|c| !c.is_ascii_alphanumeric()) {
        problems.push(("name.charset", "must be ascii alphanumeric"));
    }
    if problems.is_empty() {
        return Ok(());
    }
    Err(ErrorType::VALIDATION
        .new(VALIDATION_ERROR_MESSAGE)
        .with_contexts(problems))
}

fn check_quota(used: u32, limit: u32) -> CResult<()> {
    ensure!(used < limit, ErrorType::FORBIDDEN, "quota exhausted: {}/{}", used, limit);
    Ok(())
}

// ── Handler / presentation ────────────────────────────────────────

/// Category → HTTP-style status. Only the outermost cerror category that is
/// not `INTERNAL` decides, so a wrapped NOT_FOUND still reads as 404.
fn status_for(err: &Error) -> u16 {
    let decisive = err
        .chain()
        .map(error_type_of)
        .find(|t| *t != ErrorType::INTERNAL && *t != ErrorType::NO_TYPE)
        .unwrap_or(err.error_type());

    match decisive {
        ErrorType::VALIDATION => 400,
        ErrorType::UNAUTHORIZED => 401,
        ErrorType::FORBIDDEN => 403,
        ErrorType::NOT_FOUND => 404,
        ErrorType::ALREADY_EXIST => 409,
        _ => 500,
    }
}

fn report(request: &str, result: CResult<String>) {
    match result {
        Ok(body) => kinfo!("{:<28} -> 200 {}", request, body),
        Err(err) => {
            kwarn!(
                "{:<28} -> {} {} [{}: {}]",
                request,
                status_for(&err),
                err,
                err.error_type(),
                err.error_type().description()
            );
            for (depth, cause) in err.chain().enumerate().skip(1) {
                kdebug!("{:>width$}caused by: {}", "", cause, width = depth * 2);
            }
            kdebug!("{:>2}raised at {}", "", err.location());
            if let Some(root) = err.root_cause().downcast_ref::<Error>() {
                if let Some(ctx) = root.context() {
                    kdebug!("{:>2}context: {:?}", "", ctx);
                }
            }
        }
    }
}

fn main() {
    println!("=== cerror Layers Example ===\n");

    cerror::klog::init();

    let admin_token =
        std::env::var("LAYERS_ADMIN_TOKEN").unwrap_or_else(|_| "s3cret".to_string());
    let mut svc = AccountService {
        repo: AccountRepo::new(),
        admin_token: admin_token.clone(),
    };

    report("GET /accounts/1", svc.display_name(1));
    report("GET /accounts/42", svc.display_name(42));
    report(
        "POST /accounts/3 (bad token)",
        svc.register("guess", 3, "linus").map(|_| "created".to_string()),
    );
    report(
        "POST /accounts/3 (bad name)",
        svc.register(&admin_token, 3, "li nus!").map(|_| "created".to_string()),
    );
    report(
        "POST /accounts/2 (dup)",
        svc.register(&admin_token, 2, "grace").map(|_| "created".to_string()),
    );
    report(
        "POST /accounts/3",
        svc.register(&admin_token, 3, "linus").map(|_| "created".to_string()),
    );
    report(
        "POST /quota",
        check_quota(10, 10).map(|_| "ok".to_string()),
    );
    report(
        "GET /config",
        std::fs::read_to_string("/nonexistent/layers.toml")
            .wrap_err(ErrorType::INTERNAL, "reading config"),
    );

    let custom = ErrorType::from_code(1001);
    let err = custom.new("rate limited");
    kinfo!(
        "custom category {:?}: name={} description={} source={}",
        custom,
        custom.name(),
        custom.description(),
        err.source().is_some()
    );

    #[cfg(feature = "metrics")]
    print!("\n{}", cerror::metrics::dump_prometheus());

    println!("\n=== Example Complete ===");
}

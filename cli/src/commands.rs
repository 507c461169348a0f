//! Subcommands and their handlers.
//!
//! Each handler drives the shared flows (`LoginInput`, `SignupForm`,
//! `AuthFlow`, `ProfileLoad`, `ReadinessPoll`) exactly as the web pages do,
//! then prints the outcome in the stored locale.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;
use std::time::Duration;

use clap::{Args, Subcommand};
use flows::flow::AuthFlow;
use flows::forms::login::failure_notice;
use flows::forms::{LoginInput, SignupForm};
use flows::locale::Locale;
use flows::messages::{MessageKey, Notice, translate};
use flows::profile::{ProfileAction, ProfileLoad};
use flows::ready::{READY_POLL_INTERVAL, ReadinessPoll, poll_until_ready};
use wire::{LoginForm, User};

use crate::Context;
use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probe the backend's readiness endpoint.
    Ready(ReadyArgs),
    /// Print the backend version.
    Version,
    /// Sign in and store the access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account, then sign in with it.
    Signup(SignupArgs),
    /// Show the signed-in profile. A failed fetch signs out.
    Me,
    /// Forget the stored tokens.
    Logout,
    /// Show API URL, session, and locale.
    Status,
    /// Read or change the message locale.
    Locale {
        #[command(subcommand)]
        action: Option<LocaleAction>,
    },
}

#[derive(Args, Debug)]
pub struct ReadyArgs {
    /// Keep probing until the backend answers.
    #[arg(long, default_value_t = false)]
    pub wait: bool,

    /// Delay between probes while waiting.
    #[arg(long, default_value_t = u64::try_from(READY_POLL_INTERVAL.as_millis()).unwrap_or(1500))]
    pub interval_ms: u64,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LocaleAction {
    Get,
    Set { locale: String },
    Toggle,
}

/// Run one command against `ctx`, writing user-facing output to `out`.
///
/// # Errors
///
/// Returns a [`CliError`]; form and API failures arrive as
/// [`CliError::Rejected`] with text in the stored locale.
pub async fn execute(ctx: &Context, command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Ready(args) => ready(ctx, args, out).await,
        Command::Version => version(ctx, out).await,
        Command::Login { email, password } => login(ctx, LoginInput::new(email, password), out).await,
        Command::Signup(args) => signup(ctx, args, out).await,
        Command::Me => me(ctx, out).await,
        Command::Logout => logout(ctx, out),
        Command::Status => status(ctx, out),
        Command::Locale { action } => locale(ctx, action.unwrap_or(LocaleAction::Get), out),
    }
}

fn t(ctx: &Context, key: MessageKey) -> &'static str {
    translate(key, ctx.locale.get())
}

fn rejected(ctx: &Context, notice: &Notice) -> CliError {
    CliError::Rejected(notice.render(ctx.locale.get()))
}

async fn ready(ctx: &Context, args: ReadyArgs, out: &mut impl Write) -> Result<(), CliError> {
    if !args.wait {
        if ctx.api.check_ready().await {
            writeln!(out, "ready")?;
            return Ok(());
        }
        return Err(CliError::NotReady);
    }

    tracing::info!("{}", t(ctx, MessageKey::ServerWakingTitle));
    let mut poll = ReadinessPoll::with_interval(Duration::from_millis(args.interval_ms));
    let became_ready = poll_until_ready(&mut poll, || ctx.api.check_ready(), tokio::time::sleep).await;
    if !became_ready {
        return Err(CliError::NotReady);
    }
    writeln!(out, "ready after {} probe(s)", poll.attempts())?;
    Ok(())
}

async fn version(ctx: &Context, out: &mut impl Write) -> Result<(), CliError> {
    let body = ctx.api.fetch_version().await?;
    writeln!(out, "{} {}", t(ctx, MessageKey::FooterVersion), body.version)?;
    Ok(())
}

async fn login(ctx: &Context, input: LoginInput, out: &mut impl Write) -> Result<(), CliError> {
    let form = input.validate().map_err(|key| rejected(ctx, &key.into()))?;
    let token = ctx.api.login(&form).await.map_err(|e| {
        tracing::debug!(error = %e, "login failed");
        rejected(ctx, &failure_notice(&e))
    })?;
    ctx.tokens.store_access_token(&token.access_token)?;
    writeln!(out, "{}", greeting(ctx, &form.username))?;
    Ok(())
}

/// Apply each field the way the page does on input, then on blur.
fn fill_signup_form(args: SignupArgs) -> SignupForm {
    let mut form = SignupForm::new();
    form.set_first_name(&args.first_name);
    form.set_last_name(&args.last_name);
    form.set_job_title(args.job_title.as_deref().unwrap_or_default());
    form.set_email(&args.email);
    form.set_confirm_email(&args.email);
    form.set_password(&args.password);
    form.set_confirm_password(&args.password);

    form.blur_first_name();
    form.blur_last_name();
    form.blur_job_title();
    form.blur_email();
    form.blur_confirm_email();
    form.blur_password();
    form.blur_confirm_password();
    form
}

fn signup_rejection(ctx: &Context, form: &SignupForm) -> CliError {
    if let Some(banner) = form.banner() {
        return rejected(ctx, banner);
    }
    match form.active_error() {
        Some(error) => rejected(ctx, &error.message.into()),
        None => rejected(ctx, &MessageKey::SignupErrorGeneric.into()),
    }
}

async fn signup(ctx: &Context, args: SignupArgs, out: &mut impl Write) -> Result<(), CliError> {
    let mut form = fill_signup_form(args);
    let Some(request) = form.begin_submit() else {
        return Err(signup_rejection(ctx, &form));
    };

    if let Err(e) = ctx.api.register(&request).await {
        tracing::debug!(error = %e, "registration failed");
        form.finish_submit(Err(e));
        return Err(signup_rejection(ctx, &form));
    }
    let token = match ctx.api.login(&LoginForm::new(&request.email, &request.password)).await {
        Ok(token) => token,
        Err(e) => {
            form.finish_submit(Err(e));
            return Err(signup_rejection(ctx, &form));
        }
    };
    ctx.tokens.store_access_token(&token.access_token)?;
    form.finish_submit(Ok(()));

    writeln!(out, "{}", greeting(ctx, &request.first_name))?;
    Ok(())
}

async fn me(ctx: &Context, out: &mut impl Write) -> Result<(), CliError> {
    if !ctx.tokens.is_authenticated() {
        return Err(CliError::NotSignedIn);
    }

    let mut profile = ProfileLoad::default();
    let result = ctx.api.fetch_me().await;
    let error = result.as_ref().err().cloned();
    match profile.apply(result) {
        ProfileAction::Show => {
            if let Some(user) = profile.user() {
                write_profile(ctx, user, out)?;
            }
            Ok(())
        }
        ProfileAction::ForceLogout => {
            tracing::warn!("profile fetch failed; signing out");
            logout(ctx, out)?;
            Err(error.map_or(CliError::NotSignedIn, CliError::Api))
        }
        ProfileAction::Ignore => Ok(()),
    }
}

fn write_profile(ctx: &Context, user: &User, out: &mut impl Write) -> Result<(), CliError> {
    let status = if user.is_active { MessageKey::DashboardAccountActive } else { MessageKey::DashboardAccountInactive };
    writeln!(out, "{}", greeting(ctx, &user.display_name()))?;
    writeln!(out, "{}", t(ctx, MessageKey::DashboardAccountTitle))?;
    writeln!(out, "  id:     {}", user.id)?;
    writeln!(out, "  email:  {}", user.email)?;
    writeln!(out, "  status: {}", t(ctx, status))?;
    Ok(())
}

/// Clear the stored tokens. Nothing is printed unless both keys are gone.
fn logout(ctx: &Context, out: &mut impl Write) -> Result<(), CliError> {
    let mut flow = AuthFlow::from_tokens(&ctx.tokens);
    let (_, cleared) = flow.logout(&ctx.tokens);
    cleared?;
    writeln!(out, "{}", t(ctx, MessageKey::CommonSignedOut))?;
    Ok(())
}

fn status(ctx: &Context, out: &mut impl Write) -> Result<(), CliError> {
    let session = if ctx.tokens.is_authenticated() { "signed in" } else { "signed out" };
    writeln!(out, "api:     {}", ctx.api.base_url())?;
    writeln!(out, "session: {session}")?;
    writeln!(out, "locale:  {}", ctx.locale.get())?;
    Ok(())
}

fn locale(ctx: &Context, action: LocaleAction, out: &mut impl Write) -> Result<(), CliError> {
    let current = match action {
        LocaleAction::Get => ctx.locale.get(),
        LocaleAction::Set { locale } => {
            let next = Locale::from_code(&locale).ok_or(CliError::InvalidLocale(locale))?;
            ctx.locale.set(next)?;
            next
        }
        LocaleAction::Toggle => ctx.locale.toggle()?,
    };
    writeln!(out, "{current}")?;
    Ok(())
}

fn greeting(ctx: &Context, name: &str) -> String {
    let name = name.split('@').next().unwrap_or(name);
    format!("{}, {name}", t(ctx, MessageKey::DashboardGreeting))
}

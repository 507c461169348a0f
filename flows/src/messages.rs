//! Message catalog keyed by a fixed enum.
//!
//! Every user-visible string goes through [`translate`]. Keys map to dotted
//! ids (`login.title`) so logs and tests can name them.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::locale::Locale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ServerWakingTitle,
    ServerWakingSubtitle,
    ServerWakingTip,

    CommonLoading,
    CommonCancel,
    CommonClose,
    CommonSignedOut,
    CommonComingSoon,

    NavLogin,
    NavSignup,
    NavLogout,
    NavAbout,
    NavMenu,
    NavToggleLanguage,

    LandingHeroTitle,
    LandingHeroSubtitle,
    LandingCtaSignup,
    LandingCtaLogin,
    LandingFeatureFocusTitle,
    LandingFeatureFocusDesc,
    LandingFeatureFastTitle,
    LandingFeatureFastDesc,
    LandingFeatureReadyTitle,
    LandingFeatureReadyDesc,

    LoginTitle,
    LoginSubtitle,
    LoginEmailPlaceholder,
    LoginPasswordPlaceholder,
    LoginEmailInvalid,
    LoginPasswordRequired,
    LoginSubmit,
    LoginSubmitLoading,
    LoginErrorIncorrectCredentials,
    LoginErrorServerStarting,
    LoginErrorServerError,

    SignupTitle,
    SignupSubtitle,
    SignupFirstNamePlaceholder,
    SignupLastNamePlaceholder,
    SignupJobTitlePlaceholder,
    SignupEmailPlaceholder,
    SignupEmailConfirmPlaceholder,
    SignupPasswordPlaceholder,
    SignupPasswordConfirmPlaceholder,
    SignupShowPassword,
    SignupHidePassword,
    SignupFirstNameRequired,
    SignupFirstNameInvalidFormat,
    SignupLastNameRequired,
    SignupEmailInvalid,
    SignupEmailMismatch,
    SignupPasswordRequired,
    SignupPasswordTooShort,
    SignupPasswordMismatch,
    SignupSubmit,
    SignupSubmitLoading,
    SignupErrorServerStarting,
    SignupErrorEmailAlreadyUsed,
    SignupErrorGeneric,

    DashboardGreeting,
    DashboardSubtitle,
    DashboardAccountTitle,
    DashboardAccountActive,
    DashboardAccountInactive,
    DashboardStacksTitle,
    DashboardStacksCreate,

    NotFoundTitle,
    NotFoundSubtitle,
    NotFoundGoHome,
    NotFoundGoBack,

    AboutTitle,
    AboutDescription,
    AboutValuesTitle,
    AboutValueSimple,
    AboutValueFast,
    AboutValueHonest,
    AboutBackHome,

    FooterVersion,
}

impl MessageKey {
    /// Dotted identifier of the key.
    #[must_use]
    pub fn id(self) -> &'static str {
        entry(self).0
    }
}

/// Text for `key` in `locale`.
#[must_use]
pub fn translate(key: MessageKey, locale: Locale) -> &'static str {
    let (_, fr, en) = entry(key);
    match locale {
        Locale::Fr => fr,
        Locale::En => en,
    }
}

/// Either a catalog key or literal text (backend-provided details).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Key(MessageKey),
    Text(String),
}

impl Notice {
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        match self {
            Self::Key(key) => translate(*key, locale).to_owned(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<MessageKey> for Notice {
    fn from(key: MessageKey) -> Self {
        Self::Key(key)
    }
}

#[allow(clippy::too_many_lines)]
fn entry(key: MessageKey) -> (&'static str, &'static str, &'static str) {
    use MessageKey as K;
    match key {
        K::ServerWakingTitle => (
            "app.serverWaking.title",
            "🚀 Réveil du serveur en cours...",
            "🚀 Waking up the server…",
        ),
        K::ServerWakingSubtitle => (
            "app.serverWaking.subtitle",
            "L’API (et la base de données) démarrent. Ça prend généralement quelques secondes.",
            "The API (and database) are starting. This usually takes a few seconds.",
        ),
        K::ServerWakingTip => (
            "app.serverWaking.tip",
            "Astuce : si ça tourne indéfiniment, la base de données est peut-être arrêtée.",
            "Tip: if this keeps spinning, your database container may be down.",
        ),

        K::CommonLoading => ("common.loading", "Chargement…", "Loading…"),
        K::CommonCancel => ("common.cancel", "Annuler", "Cancel"),
        K::CommonClose => ("common.close", "Fermer", "Close"),
        K::CommonSignedOut => ("common.signedOut", "Tu es déconnecté.", "You are signed out."),
        K::CommonComingSoon => ("common.comingSoon", "Bientôt disponible", "Coming soon"),

        K::NavLogin => ("nav.login", "Connexion", "Log in"),
        K::NavSignup => ("nav.signup", "Inscription", "Sign up"),
        K::NavLogout => ("nav.logout", "Déconnexion", "Log out"),
        K::NavAbout => ("nav.about", "À propos", "About"),
        K::NavMenu => ("nav.menu", "Menu", "Menu"),
        K::NavToggleLanguage => ("nav.toggleLanguage", "Changer de langue", "Toggle language"),

        K::LandingHeroTitle => (
            "landing.hero.title",
            "Empile tes idées avec Stakr",
            "Stack your ideas with Stakr",
        ),
        K::LandingHeroSubtitle => (
            "landing.hero.subtitle",
            "Un espace simple pour organiser ce qui compte.",
            "A simple space to organize what matters.",
        ),
        K::LandingCtaSignup => ("landing.cta.signup", "Créer un compte", "Create an account"),
        K::LandingCtaLogin => ("landing.cta.login", "J’ai déjà un compte", "I already have an account"),
        K::LandingFeatureFocusTitle => ("landing.features.focus.title", "Concentré", "Focused"),
        K::LandingFeatureFocusDesc => (
            "landing.features.focus.desc",
            "Seulement l’essentiel, sans distraction.",
            "Only the essentials, no distractions.",
        ),
        K::LandingFeatureFastTitle => ("landing.features.fast.title", "Rapide", "Fast"),
        K::LandingFeatureFastDesc => (
            "landing.features.fast.desc",
            "Connecte-toi et retrouve ton tableau de bord en un instant.",
            "Sign in and land on your dashboard in a moment.",
        ),
        K::LandingFeatureReadyTitle => ("landing.features.ready.title", "Prêt", "Ready"),
        K::LandingFeatureReadyDesc => (
            "landing.features.ready.desc",
            "Ton compte est prêt dès l’inscription.",
            "Your account is ready as soon as you sign up.",
        ),

        K::LoginTitle => ("login.title", "Stakr", "Stakr"),
        K::LoginSubtitle => ("login.subtitle", "Ravi de te revoir !", "Welcome back"),
        K::LoginEmailPlaceholder => ("login.email.placeholder", "Email", "Email"),
        K::LoginPasswordPlaceholder => ("login.password.placeholder", "Mot de passe", "Password"),
        K::LoginEmailInvalid => ("login.email.invalid", "Adresse email invalide.", "Invalid email address."),
        K::LoginPasswordRequired => (
            "login.password.required",
            "Mot de passe requis.",
            "Password is required.",
        ),
        K::LoginSubmit => ("login.submit", "Se connecter", "Sign in"),
        K::LoginSubmitLoading => ("login.submit.loading", "Connexion…", "Signing in…"),
        K::LoginErrorIncorrectCredentials => (
            "login.error.incorrectCredentials",
            "Email ou mot de passe incorrect.",
            "Incorrect email or password.",
        ),
        K::LoginErrorServerStarting => (
            "login.error.serverStarting",
            "Le serveur démarre. Patiente quelques secondes puis réessaie.",
            "Server is starting up. Please wait a few seconds and retry.",
        ),
        K::LoginErrorServerError => (
            "login.error.serverError",
            "Erreur serveur. Réessaie dans quelques secondes.",
            "Server error. Please retry in a moment.",
        ),

        K::SignupTitle => ("signup.title", "Stakr", "Stakr"),
        K::SignupSubtitle => ("signup.subtitle", "Crée ton compte", "Create your account"),
        K::SignupFirstNamePlaceholder => ("signup.firstName.placeholder", "Prénom", "First name"),
        K::SignupLastNamePlaceholder => ("signup.lastName.placeholder", "Nom", "Last name"),
        K::SignupJobTitlePlaceholder => (
            "signup.jobTitle.placeholder",
            "Poste (optionnel)",
            "Job title (optional)",
        ),
        K::SignupEmailPlaceholder => ("signup.email.placeholder", "Email", "Email"),
        K::SignupEmailConfirmPlaceholder => (
            "signup.emailConfirm.placeholder",
            "Confirme ton email",
            "Confirm your email",
        ),
        K::SignupPasswordPlaceholder => (
            "signup.password.placeholder",
            "Mot de passe (8 caractères min.)",
            "Password (8 characters min.)",
        ),
        K::SignupPasswordConfirmPlaceholder => (
            "signup.passwordConfirm.placeholder",
            "Confirme ton mot de passe",
            "Confirm your password",
        ),
        K::SignupShowPassword => ("signup.password.show", "Afficher", "Show"),
        K::SignupHidePassword => ("signup.password.hide", "Masquer", "Hide"),
        K::SignupFirstNameRequired => (
            "signup.firstName.required",
            "Prénom requis (50 caractères max.).",
            "First name is required (50 characters max).",
        ),
        K::SignupFirstNameInvalidFormat => (
            "signup.firstName.invalidFormat",
            "Le prénom ne peut contenir que des lettres, espaces, tirets et apostrophes.",
            "First name may only contain letters, spaces, hyphens and apostrophes.",
        ),
        K::SignupLastNameRequired => (
            "signup.lastName.required",
            "Nom requis (50 caractères max.).",
            "Last name is required (50 characters max).",
        ),
        K::SignupEmailInvalid => ("signup.email.invalid", "Adresse email invalide.", "Invalid email address."),
        K::SignupEmailMismatch => (
            "signup.email.mismatch",
            "Les adresses email ne correspondent pas.",
            "Email addresses do not match.",
        ),
        K::SignupPasswordRequired => (
            "signup.password.required",
            "Mot de passe requis.",
            "Password is required.",
        ),
        K::SignupPasswordTooShort => (
            "signup.password.tooShort",
            "Le mot de passe doit contenir au moins 8 caractères.",
            "Password must be at least 8 characters.",
        ),
        K::SignupPasswordMismatch => (
            "signup.password.mismatch",
            "Les mots de passe ne correspondent pas.",
            "Passwords do not match.",
        ),
        K::SignupSubmit => ("signup.submit", "Créer mon compte", "Create my account"),
        K::SignupSubmitLoading => ("signup.submit.loading", "Création…", "Creating…"),
        K::SignupErrorServerStarting => (
            "signup.error.serverStarting",
            "Le serveur démarre. Patiente quelques secondes puis réessaie.",
            "Server is starting up. Please wait a few seconds and retry.",
        ),
        K::SignupErrorEmailAlreadyUsed => (
            "signup.error.emailAlreadyUsed",
            "Cette adresse email est déjà utilisée.",
            "This email address is already in use.",
        ),
        K::SignupErrorGeneric => (
            "signup.error.generic",
            "Inscription impossible. Vérifie les champs puis réessaie.",
            "Sign up failed. Check the fields and retry.",
        ),

        K::DashboardGreeting => ("dashboard.greeting", "Salut", "Hi"),
        K::DashboardSubtitle => (
            "dashboard.subtitle",
            "Voici un aperçu de ton compte.",
            "Here is an overview of your account.",
        ),
        K::DashboardAccountTitle => ("dashboard.account.title", "Compte", "Account"),
        K::DashboardAccountActive => ("dashboard.account.status.active", "Actif", "Active"),
        K::DashboardAccountInactive => ("dashboard.account.status.inactive", "Inactif", "Inactive"),
        K::DashboardStacksTitle => ("dashboard.stacks.title", "Piles", "Stacks"),
        K::DashboardStacksCreate => ("dashboard.stacks.create", "Créer une pile", "Create a stack"),

        K::NotFoundTitle => ("notFound.title", "Page introuvable", "Page not found"),
        K::NotFoundSubtitle => (
            "notFound.subtitle",
            "Cette page n’existe pas ou a été déplacée.",
            "This page does not exist or has moved.",
        ),
        K::NotFoundGoHome => ("notFound.goHome", "Accueil", "Go home"),
        K::NotFoundGoBack => ("notFound.goBack", "Retour", "Go back"),

        K::AboutTitle => ("about.title", "À propos de Stakr", "About Stakr"),
        K::AboutDescription => (
            "about.description",
            "Stakr t’aide à garder tes projets empilés et en ordre.",
            "Stakr helps you keep your projects stacked and in order.",
        ),
        K::AboutValuesTitle => ("about.valuesTitle", "Nos valeurs", "Our values"),
        K::AboutValueSimple => ("about.value1", "Simplicité", "Simplicity"),
        K::AboutValueFast => ("about.value2", "Rapidité", "Speed"),
        K::AboutValueHonest => ("about.value3", "Transparence", "Transparency"),
        K::AboutBackHome => ("about.backHome", "Retour à l’accueil", "Back home"),

        K::FooterVersion => ("footer.version", "Version", "Version"),
    }
}

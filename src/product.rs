//! Product filter profiles
//!
//! A product is a named selection of repository paths: the subset of a
//! repository's entities that actually ship in that product. The rule
//! sets are static configuration handed down from the build system, not
//! user input.

use std::fmt;

/// Products we can scope string selection to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Firefox,
    FirefoxAndroid,
    Lightning,
    Thunderbird,
    Seamonkey,
    FirefoxOs,
    MozillaOrg,
}

/// Entity suffixes identifying access keys and command keys, excludable
/// as a block because they are shortcut variants of other entities.
pub const ACCESS_KEY_SUFFIXES: &[&str] =
    &["accesskey", "key", "accesskey2", "accessKey", "commandKey"];

/// Exclusions applying to every product: test strings, retired branding,
/// and strings that are optional for locales.
pub const GLOBAL_EXCLUDE_PREFIXES: &[&str] = &[
    "browser/metro",
    "browser/chrome/browser/devtools/styleeditor.dtd:noStyleSheet-tip",
    "extensions/irc/chrome/chatzilla.properties:pref.bugKeyword",
    "mail/branding",
    "mail/test/",
    "mobile/android/branding",
    "mobile/android/defines.inc",
    "mobile/chrome/region.properties",
    "suite/chrome/browser/region.properties",
    "suite/chrome/common/region.properties",
    "toolkit/content/tests/",
    "toolkit/chrome/mozapps/plugins/plugins.dtd:reloadPlugin.pre",
];

const FIREFOX_INCLUDE: &[&str] = &[
    "browser",
    "other-licenses/branding/firefox",
    "extensions/reporter",
    "netwerk",
    "dom",
    "toolkit",
    "security/manager",
    "browser/branding/official",
    "services/sync",
    "webapprt",
];

const FIREFOX_EXCLUDE: &[&str] = &[
    "browser/chrome/browser-region/region.properties",
    "browser/branding/aurora",
    "browser/branding/nightly",
    "browser/branding/unofficial",
    // Strings optional for locales, safe to ignore
    "toolkit/chrome/global/intl.properties:intl.charset.detector",
    "toolkit/chrome/global-platform/mac/platformKeys.properties:MODIFIER_SEPARATOR",
    "toolkit/chrome/global/intl.properties:intl.menuitems.alwaysappendaccesskeys",
    "browser/chrome/browser/preferences/sync.dtd:signedInUnverified.beforename.label",
    "browser/chrome/browser/translation.dtd:translation.options.attribution.afterLogo",
    "browser/chrome/browser/preferences/content.dtd:translation.options.attribution.afterLogo",
    "browser/chrome/browser/syncSetup.dtd:setup.tosAgree3.label",
    "browser/chrome/browser/preferences/sync.dtd:signedInLoginFailure.aftername.label",
    "browser/chrome/browser/aboutDialog.dtd:community.exp.start",
    "browser/chrome/browser/preferences/privacy.dtd:locbar.post.label",
    "browser/chrome/browser/preferences/aboutPermissions.dtd:header.site.end",
    "browser/chrome/browser/translation.dtd:translation.translatedToSuffix.label",
];

const FIREFOX_ANDROID_INCLUDE: &[&str] = &[
    "mobile",
    "toolkit",
    "netwerk",
    "dom",
    "security/manager",
    "services/sync",
];

const LIGHTNING_INCLUDE: &[&str] = &["calendar"];

const THUNDERBIRD_INCLUDE: &[&str] = &[
    "mail",
    "chat",
    "other-licenses/branding/thunderbird",
    "editor/ui",
    "toolkit",
    "netwerk",
    "dom",
    "security/manager",
];

const SEAMONKEY_INCLUDE: &[&str] = &[
    "suite",
    "editor/ui",
    "toolkit",
    "netwerk",
    "dom",
    "security/manager",
    "services/sync",
    "extensions/spellcheck",
];

/// Devtools component paths, Firefox only.
pub const DEVTOOLS_PREFIXES: &[&str] = &[
    "toolkit/chrome/global/devtools/",
    "browser/chrome/browser/devtools/",
];

/// Devtools entities living outside the devtools paths, whitelisted in
/// browser.dtd one by one.
pub const DEVTOOLS_WHITELIST: &[&str] = &[
    "browser/chrome/browser/browser.dtd:webDeveloperMenu.label",
    "browser/chrome/browser/browser.dtd:webDeveloperMenu.accesskey",
    "browser/chrome/browser/browser.dtd:devToolsCmd.keycode",
    "browser/chrome/browser/browser.dtd:devToolsCmd.keytext",
    "browser/chrome/browser/browser.dtd:devtoolsConnect.accesskey",
    "browser/chrome/browser/browser.dtd:devToolbarMenu.accesskey",
    "browser/chrome/browser/browser.dtd:errorConsoleCmd.accesskey",
    "browser/chrome/browser/browser.dtd:browserConsoleCmd.commandkey",
    "browser/chrome/browser/browser.dtd:browserConsoleCmd.accesskey",
    "browser/chrome/browser/browser.dtd:inspectContextMenu.accesskey",
    "browser/chrome/browser/browser.dtd:responsiveDesignTool.accesskey",
    "browser/chrome/browser/browser.dtd:responsiveDesignTool.commandkey",
    "browser/chrome/browser/browser.dtd:scratchpad.accesskey",
    "browser/chrome/browser/browser.dtd:eyedropper.accesskey",
    "browser/chrome/browser/browser.dtd:browserToolboxMenu.accesskey",
    "browser/chrome/browser/browser.dtd:devAppMgrMenu.accesskey",
    "browser/chrome/browser/browser.dtd:webide.accesskey",
    "browser/chrome/browser/browser.dtd:devToolboxMenuItem.keytext",
    "browser/chrome/browser/browser.dtd:devToolboxMenuItem.accesskey",
    "browser/chrome/browser/browser.dtd:getMoreDevtoolsCmd.accesskey",
    "browser/chrome/browser/browser.dtd:scratchpad.keytext",
    "browser/chrome/browser/browser.dtd:webide.keytext",
    "browser/chrome/browser/browser.dtd:devToolbar.keytext",
    "browser/chrome/browser/browser.dtd:scratchpad.keycode",
    "browser/chrome/browser/browser.dtd:webide.keycode",
    "browser/chrome/browser/browser.dtd:devToolbar.keycode",
    "browser/chrome/browser/browser.dtd:webide.label",
    "browser/chrome/browser/browser.dtd:devtoolsConnect.label",
    "browser/chrome/browser/browser.dtd:eyedropper.label",
    "browser/chrome/browser/browser.dtd:scratchpad.label",
    "browser/chrome/browser/browser.dtd:devToolbarOtherToolsButton.label",
    "browser/chrome/browser/browser.dtd:devAppMgrMenu.label",
    "browser/chrome/browser/browser.dtd:devToolboxMenuItem.label",
    "browser/chrome/browser/browser.dtd:errorConsoleCmd.label",
    "browser/chrome/browser/browser.dtd:browserConsoleCmd.label",
    "browser/chrome/browser/browser.dtd:inspectContextMenu.label",
    "browser/chrome/browser/browser.dtd:browserToolboxMenu.label",
    "browser/chrome/browser/browser.dtd:getMoreDevtoolsCmd.label",
    "browser/chrome/browser/browser.dtd:devToolbarMenu.label",
    "browser/chrome/browser/browser.dtd:remoteWebConsoleCmd.label",
    "browser/chrome/browser/browser.dtd:responsiveDesignTool.label",
    "browser/chrome/browser/browser.dtd:devToolbarCloseButton.tooltiptext",
    "browser/chrome/browser/browser.dtd:devToolbarToolsButton.tooltip",
];

impl Product {
    /// Supported products; the first is the fallback for unknown names.
    pub const ALL: [Product; 7] = [
        Product::Firefox,
        Product::FirefoxAndroid,
        Product::Lightning,
        Product::Thunderbird,
        Product::Seamonkey,
        Product::FirefoxOs,
        Product::MozillaOrg,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Product::Firefox => "Firefox",
            Product::FirefoxAndroid => "FirefoxAndroid",
            Product::Lightning => "Lightning",
            Product::Thunderbird => "Thunderbird",
            Product::Seamonkey => "Seamonkey",
            Product::FirefoxOs => "FirefoxOS",
            Product::MozillaOrg => "Mozilla.org",
        }
    }

    pub fn parse(name: &str) -> Option<Product> {
        Product::ALL.iter().copied().find(|p| p.label() == name)
    }

    /// Unknown product names silently fall back to the first supported
    /// product.
    pub fn parse_or_default(name: &str) -> Product {
        Product::parse(name).unwrap_or(Product::ALL[0])
    }

    /// Path prefixes in scope for this product. Empty means every entity
    /// of the repository is in scope.
    pub fn include_prefixes(&self) -> &'static [&'static str] {
        match self {
            Product::Firefox => FIREFOX_INCLUDE,
            Product::FirefoxAndroid => FIREFOX_ANDROID_INCLUDE,
            Product::Lightning => LIGHTNING_INCLUDE,
            Product::Thunderbird => THUNDERBIRD_INCLUDE,
            Product::Seamonkey => SEAMONKEY_INCLUDE,
            Product::FirefoxOs | Product::MozillaOrg => &[],
        }
    }

    /// Product-specific exclusions, applied on top of
    /// [`GLOBAL_EXCLUDE_PREFIXES`].
    pub fn exclude_prefixes(&self) -> &'static [&'static str] {
        match self {
            Product::Firefox => FIREFOX_EXCLUDE,
            _ => &[],
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

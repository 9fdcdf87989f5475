//! The role selector that decides whether the admin forms are shown.
//!
//! The role is chosen per request through the `role` query parameter. It only
//! changes what is rendered: the write endpoints do not check it.

use std::{fmt, str::FromStr};

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE},
    transaction::UnknownVariant,
};

/// Who is looking at the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    /// Can see the budget tables.
    #[default]
    Viewer,
    /// Can also add, update and delete transactions.
    Admin,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 2] = [Role::Viewer, Role::Admin];

    /// The value used in the `role` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Admin => "admin",
        }
    }

    /// The name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Admin => "Admin",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("role", s))
    }
}

/// The sidebar with the role picker and the current role.
///
/// Changing the role reloads the dashboard, keeping the current filters.
pub fn role_sidebar(current: Role) -> Markup {
    html! {
        aside
            id="role-sidebar"
            class="w-full lg:w-64 shrink-0 p-4 space-y-4 bg-white rounded-lg shadow
                dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            fieldset
            {
                legend class="mb-2 text-sm font-medium" { "Select Role" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for role in Role::ALL {
                        label class="flex items-center gap-2"
                        {
                            input
                                type="radio"
                                name="role"
                                value=(role.as_str())
                                checked[role == current]
                                class={(FORM_RADIO_INPUT_STYLE) " dashboard-control"}
                                hx-get=(endpoints::DASHBOARD_VIEW)
                                hx-trigger="change"
                                hx-include=".dashboard-control"
                                hx-target="body"
                                hx-push-url="true";

                            span class=(FORM_RADIO_LABEL_STYLE) { (role.label()) }
                        }
                    }
                }
            }

            p id="current-role" class="text-sm" { "Current Role: " (current.label()) }
        }
    }
}

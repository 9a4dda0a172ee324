//! Named wrappers for frequently used Gigya methods.
//!
//! Each wrapper is a one-line forward to [`GigyaClient::invoke`]; methods not
//! listed here are reachable through [`GigyaClient::call`].

use super::GigyaClient;
use crate::error::GigyaError;
use crate::namespace::Namespace;
use crate::params::Params;
use crate::response::Outcome;
use crate::transport::Transport;

macro_rules! remote_methods {
    ($( $(#[$meta:meta])* $name:ident => $namespace:ident . $method:literal; )*) => {
        impl<T: Transport> GigyaClient<T> {
            $(
                $(#[$meta])*
                ///
                /// ## Errors
                ///
                /// See [`invoke`](Self::invoke).
                pub async fn $name(&self, params: Params) -> Result<Outcome, GigyaError> {
                    self.invoke(Namespace::$namespace, $method, params).await
                }
            )*
        }

        /// Remote methods that have a named wrapper.
        pub const WRAPPED_METHODS: &[(Namespace, &str)] = &[
            $( (Namespace::$namespace, $method), )*
        ];
    };
}

remote_methods! {
    /// `socialize.getUserInfo`: profile and connection info for a `UID`.
    socialize_get_user_info => Socialize."getUserInfo";
    /// `socialize.notifyLogin`: registers a site login; takes `siteUID`
    /// and optionally `userInfo` as JSON.
    socialize_notify_login => Socialize."notifyLogin";
    /// `socialize.notifyRegistration`: links a Gigya `UID` to a `siteUID`.
    socialize_notify_registration => Socialize."notifyRegistration";
    /// `socialize.deleteAccount`: removes the user identified by `UID`.
    socialize_delete_account => Socialize."deleteAccount";
    /// `socialize.logout`: ends the user's Gigya session.
    socialize_logout => Socialize."logout";
    /// `gm.notifyAction`: reports a game mechanics action for a user.
    gm_notify_action => Gm."notifyAction";
    /// `gm.getChallengeStatus`: a user's progress in challenges.
    gm_get_challenge_status => Gm."getChallengeStatus";
    /// `comments.getComments`: comments of one stream.
    comments_get_comments => Comments."getComments";
    /// `comments.getTopStreams`: most active comment streams.
    comments_get_top_streams => Comments."getTopStreams";
}

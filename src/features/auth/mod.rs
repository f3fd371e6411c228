//! Auth feature: in-memory identity state shared through context and the
//! client-side route guard. The one-time-code flow itself lives in
//! `crate::flow`; this module only holds what the UI needs after a code
//! checks out.

mod guards;
pub(crate) mod state;

pub(crate) use guards::RequireAuth;

//! Fixed replies for routes that never consult the backend.

use super::route::Route;

/// A constant answer and the trace entry recorded with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedReply {
    pub answer: &'static str,
    pub trace: &'static str,
}

pub const HANDOVER_ANSWER: &str =
    "Votre demande dépasse mes capacités. Je la transfère à un agent humain.";

const TABLE: &[(Route, CannedReply)] = &[
    (
        Route::Greeting,
        CannedReply {
            answer: "Bonjour ! En quoi puis-je vous aider aujourd'hui ?",
            trace: "[greeting]",
        },
    ),
    (
        Route::Thanks,
        CannedReply {
            answer: "Merci à vous ! Si vous avez d'autres questions, je suis là.",
            trace: "[thanks]",
        },
    ),
    (
        Route::Farewell,
        CannedReply {
            answer: "Au revoir ! Passez une excellente journée !",
            trace: "[farewell]",
        },
    ),
    (Route::Handover, CannedReply::HANDOVER),
];

impl CannedReply {
    pub const HANDOVER: CannedReply = CannedReply {
        answer: HANDOVER_ANSWER,
        trace: "[handover] escalation",
    };

    /// The reply for a route, if that route is answered from the table.
    pub fn for_route(route: Route) -> Option<CannedReply> {
        TABLE
            .iter()
            .find(|(candidate, _)| *candidate == route)
            .map(|(_, reply)| *reply)
    }
}

/// ```latex
/// E(s, a) = c \sqrt{\frac{\ln N(s)}{N(s, a)}}
/// ```
fn exploration(c: f32, visits: f32, action_visits: f32) -> f32 {
    c * (visits.max(1.0).ln() / action_visits).sqrt()
}

/// Q(s, a) + E(s, a), used where the maximizer is to move.
/// Untried actions are infinitely attractive.
pub fn upper_confidence_bound(q_value: f32, c: f32, visits: f32, action_visits: f32) -> f32 {
    if action_visits == 0.0 {
        return f32::INFINITY;
    }
    q_value + exploration(c, visits, action_visits)
}

/// Q(s, a) - E(s, a), used where the minimizer is to move.
pub fn lower_confidence_bound(q_value: f32, c: f32, visits: f32, action_visits: f32) -> f32 {
    if action_visits == 0.0 {
        return f32::NEG_INFINITY;
    }
    q_value - exploration(c, visits, action_visits)
}

use wizard_engine::{DomainError, Game};

/// Drive `game` to the end, picking `choices[i] % legal.len()` at step `i`
/// (wrapping around the choice list).
pub fn play_with_choices(game: &mut Game, choices: &[usize]) -> Result<usize, DomainError> {
    let mut steps = 0usize;
    while !game.is_over() {
        let seat = game.current_seat();
        let legal = game.legal_actions(seat);
        let pick = choices
            .get(steps % choices.len().max(1))
            .copied()
            .unwrap_or(0)
            % legal.len();
        game.step_card(legal[pick])?;
        steps += 1;
    }
    Ok(steps)
}

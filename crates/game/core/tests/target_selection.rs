use pursuit_core::{
    AgentId, AgentObservation, Cell, ItemObservation, MapDimensions, MemoryField, PlannerConfig,
    TargetSelector, TerrainGrid, TurnSnapshot, ValueField, rank_candidates,
};

fn merged(terrain: &TerrainGrid, snapshot: &TurnSnapshot) -> MemoryField {
    let mut memory = MemoryField::new(terrain);
    memory.merge(terrain, snapshot);
    memory
}

#[test]
fn open_grid_picks_the_rare_item() {
    let terrain = TerrainGrid::open(MapDimensions::new(5, 5));
    let config = PlannerConfig::default();
    let memory = merged(
        &terrain,
        &TurnSnapshot::new(
            vec![AgentObservation::friendly(0, Cell::new(0, 0))],
            vec![ItemObservation::rare(Cell::new(4, 4))],
        ),
    );

    let field = ValueField::build(Cell::new(0, 0), &terrain, &memory, config.step_cost);
    let ranked = rank_candidates(&field, config.distance_discount);
    assert_eq!(ranked[0].cell, Cell::new(4, 4));
    assert!(ranked[0].desirability > ranked[1].desirability);

    let mut selector = TargetSelector::new(&config);
    assert_eq!(selector.select(AgentId(0), Cell::new(0, 0), &field), Cell::new(4, 4));
}

#[test]
fn enclosed_agent_targets_its_own_cell() {
    let terrain = TerrainGrid::from_rows(
        MapDimensions::new(3, 3),
        &["###", "# #", "###"],
    )
    .unwrap();
    let config = PlannerConfig::default();
    let memory = merged(
        &terrain,
        &TurnSnapshot::new(vec![AgentObservation::friendly(0, Cell::new(1, 1))], vec![]),
    );

    let field = ValueField::build(Cell::new(1, 1), &terrain, &memory, config.step_cost);
    let mut selector = TargetSelector::new(&config);

    assert_eq!(field.visited_count(), 1);
    assert_eq!(selector.select(AgentId(0), Cell::new(1, 1), &field), Cell::new(1, 1));
    assert!(selector.target(AgentId(0)).is_none());
}

/// Corridor with the agent in the middle. Turn one shows a common item to the
/// right; turn two adds a rare item to the left.
fn corridor(turn: u32) -> (TerrainGrid, MemoryField) {
    let terrain = TerrainGrid::from_rows(MapDimensions::new(9, 1), &["#       #"]).unwrap();
    let mut memory = MemoryField::new(&terrain);
    let agent = AgentObservation::friendly(0, Cell::new(4, 0));
    memory.merge(
        &terrain,
        &TurnSnapshot::new(vec![agent], vec![ItemObservation::common(Cell::new(7, 0))]),
    );
    if turn > 1 {
        memory.merge(
            &terrain,
            &TurnSnapshot::new(
                vec![agent],
                vec![
                    ItemObservation::rare(Cell::new(1, 0)),
                    ItemObservation::common(Cell::new(7, 0)),
                ],
            ),
        );
    }
    (terrain, memory)
}

fn flat_config(retarget_margin: f64) -> PlannerConfig {
    PlannerConfig::default()
        .with_distance_discount(0.0)
        .with_step_cost(0)
        .with_retarget_margin(retarget_margin)
}

#[test]
fn small_improvement_keeps_current_target() {
    let config = flat_config(100.0);
    let mut selector = TargetSelector::new(&config);

    let (terrain, memory) = corridor(1);
    let field = ValueField::build(Cell::new(4, 0), &terrain, &memory, config.step_cost);
    assert_eq!(selector.select(AgentId(0), Cell::new(4, 0), &field), Cell::new(7, 0));

    // The rare item is better, but not by more than the margin.
    let (terrain, memory) = corridor(2);
    let field = ValueField::build(Cell::new(4, 0), &terrain, &memory, config.step_cost);
    assert_eq!(rank_candidates(&field, 0.0)[0].cell, Cell::new(1, 0));
    assert_eq!(selector.select(AgentId(0), Cell::new(4, 0), &field), Cell::new(7, 0));
}

#[test]
fn large_improvement_switches_target() {
    let config = flat_config(1.0);
    let mut selector = TargetSelector::new(&config);

    let (terrain, memory) = corridor(1);
    let field = ValueField::build(Cell::new(4, 0), &terrain, &memory, config.step_cost);
    assert_eq!(selector.select(AgentId(0), Cell::new(4, 0), &field), Cell::new(7, 0));

    let (terrain, memory) = corridor(2);
    let field = ValueField::build(Cell::new(4, 0), &terrain, &memory, config.step_cost);
    assert_eq!(selector.select(AgentId(0), Cell::new(4, 0), &field), Cell::new(1, 0));
    assert_eq!(
        selector.target(AgentId(0)).map(|target| target.cell),
        Some(Cell::new(1, 0))
    );
}

#[test]
fn target_is_stable_while_field_is_unchanged() {
    let terrain = TerrainGrid::open(MapDimensions::new(7, 7));
    let config = PlannerConfig::default();
    let memory = merged(
        &terrain,
        &TurnSnapshot::new(
            vec![AgentObservation::friendly(0, Cell::new(3, 3))],
            vec![
                ItemObservation::rare(Cell::new(0, 0)),
                ItemObservation::rare(Cell::new(6, 6)),
            ],
        ),
    );
    let mut selector = TargetSelector::new(&config);

    let field = ValueField::build(Cell::new(3, 3), &terrain, &memory, config.step_cost);
    let first = selector.select(AgentId(0), Cell::new(3, 3), &field);
    for _ in 0..5 {
        assert_eq!(selector.select(AgentId(0), Cell::new(3, 3), &field), first);
    }
}

#[test]
fn unreachable_target_is_replaced_within_margin() {
    // Two corridors separated by a wall at x = 4.
    let terrain = TerrainGrid::from_rows(MapDimensions::new(9, 1), &["#   #   #"]).unwrap();
    let config = flat_config(100.0);
    let mut selector = TargetSelector::new(&config);
    let mut memory = MemoryField::new(&terrain);

    memory.merge(
        &terrain,
        &TurnSnapshot::new(
            vec![AgentObservation::friendly(0, Cell::new(2, 0))],
            vec![ItemObservation::common(Cell::new(3, 0))],
        ),
    );
    let field = ValueField::build(Cell::new(2, 0), &terrain, &memory, config.step_cost);
    assert_eq!(selector.select(AgentId(0), Cell::new(2, 0), &field), Cell::new(3, 0));

    // Displaced into the other corridor: every candidate there is worse than
    // the recorded target, but the target can no longer be reached.
    memory.merge(
        &terrain,
        &TurnSnapshot::new(vec![AgentObservation::friendly(0, Cell::new(6, 0))], vec![]),
    );
    let field = ValueField::build(Cell::new(6, 0), &terrain, &memory, config.step_cost);
    assert!(!field.is_reachable(Cell::new(3, 0)));

    assert_eq!(selector.select(AgentId(0), Cell::new(6, 0), &field), Cell::new(5, 0));
    assert_eq!(
        selector.target(AgentId(0)).map(|target| target.cell),
        Some(Cell::new(5, 0))
    );
}

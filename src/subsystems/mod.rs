mod collision_handling;
mod cool_down_handling;
mod difficulty_progression;
mod entity_spawning;
mod life_span_management;
mod object_positioning;
mod player_controls_handling;
mod rendering;

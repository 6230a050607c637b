//! Fixed SQL issued by the gateway. None of these take bind parameters.

pub const TEAMS: &str = "SELECT * FROM vw_driver_lineup ORDER BY team_name, driver_name";

pub const CALENDAR: &str = "SELECT * FROM vw_race_calendar ORDER BY race_date";

pub const STANDINGS: &str =
    "SELECT * FROM vw_driver_standings ORDER BY total_points DESC, driver_name";

/// Every session result joined with its session, race, driver and constructor
pub const RESULTS: &str = "
    SELECT
        res.result_id,
        s.session_id,
        s.session_type,
        r.name AS grand_prix,
        r.race_date,
        res.final_position,
        d.driver_id,
        d.first_name || ' ' || d.last_name AS driver_name,
        c.constructor_id,
        c.name AS team_name,
        res.grid_position,
        res.laps_completed,
        res.time_or_status,
        res.points
    FROM Results res
    JOIN Sessions s ON res.session_id = s.session_id
    JOIN Races r ON s.race_id = r.race_id
    JOIN Drivers d ON res.driver_id = d.driver_id
    JOIN Constructors c ON d.constructor_id = c.constructor_id
    ORDER BY r.race_date, s.session_date_time, res.final_position
";

use chrono::{Duration, Utc};
use daynight::{
    clock_at_offset, snapshots, standard_meridians, SkySnapshot, StandardMeridian, TwilightBand,
    UtcPeriod,
};

fn main() -> daynight::Result<()> {
    let now = Utc::now();
    let sky = SkySnapshot::at(now);

    println!("{now}");
    println!(
        "  Sun overhead at  ({:+.2}, {:+.2})",
        sky.sub_solar.lat(),
        sky.sub_solar.lng()
    );
    println!(
        "  Moon overhead at ({:+.2}, {:+.2}), {} ({:.0}% lit)",
        sky.sub_lunar.lat(),
        sky.sub_lunar.lng(),
        sky.moon_phase.name(),
        sky.moon_phase.fraction * 100.0
    );

    for (band, polygon) in sky.paint_order() {
        let name = band.map_or("night", |b: TwilightBand| b.as_str());
        println!(
            "  {name:<13} {} vertices{}",
            polygon.len(),
            if polygon.crosses_antimeridian() {
                ", wraps the antimeridian"
            } else {
                ""
            }
        );
    }

    let here = StandardMeridian::containing(sky.sub_solar.lng());
    println!(
        "  Local noon is in {here} ({})",
        here.clock(now).format("%H:%M")
    );
    println!("  India: {}", clock_at_offset(now, 5.5)?.format("%H:%M"));
    println!("  {} nominal zones", standard_meridians().len());

    let next_day = UtcPeriod::new(now, now + Duration::days(1));
    let frames = snapshots(&next_day, Duration::hours(3))?;
    for frame in &frames {
        println!(
            "  {}  sun lng {:+7.2}",
            frame.instant.format("%d %b %H:%M"),
            frame.sub_solar.lng()
        );
    }

    Ok(())
}

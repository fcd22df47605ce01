//! Heliocentric position of Pluto.
//!
//! A 43-term periodic fit to the DE200 ephemeris, valid from 1885 to 2099.
//! Positions refer to the ecliptic and equinox of J2000.0.

use astro_core::types::{j2000_century, Angle};

/// One periodic term: multiples of the Jupiter, Saturn and Pluto mean
/// longitudes, with sine and cosine coefficients for longitude and latitude
/// (degrees) and radius (AU).
struct Term {
    i: f64,
    j: f64,
    k: f64,
    lon: [f64; 2],
    lat: [f64; 2],
    rad: [f64; 2],
}

const fn term(i: i32, j: i32, k: i32, lon: [f64; 2], lat: [f64; 2], rad: [f64; 2]) -> Term {
    Term {
        i: i as f64,
        j: j as f64,
        k: k as f64,
        lon,
        lat,
        rad,
    }
}

#[rustfmt::skip]
const TERMS: [Term; 43] = [
    term(0, 0, 1, [-19.799805, 19.850055], [-5.452852, -14.974862], [6.6865439, 6.8951812]),
    term(0, 0, 2, [0.897144, -4.954829], [3.527812, 1.67279], [-1.1827535, -0.0332538]),
    term(0, 0, 3, [0.611149, 1.211027], [-1.050748, 0.327647], [0.1593179, -0.143889]),
    term(0, 0, 4, [-0.341243, -0.189585], [0.17869, -0.292153], [-0.0018444, 0.048322]),
    term(0, 0, 5, [0.129287, -0.034992], [0.01865, 0.10034], [-0.0065977, -0.0085431]),
    term(0, 0, 6, [-0.038164, 0.030893], [-0.030697, -0.025823], [0.0031174, -0.0006032]),
    term(0, 1, -1, [0.020442, -0.009987], [0.004878, 0.011248], [-0.0005794, 0.0022161]),
    term(0, 1, 0, [-0.004063, -0.005071], [0.000226, -0.000064], [0.0004601, 0.0004032]),
    term(0, 1, 1, [-0.006016, -0.003336], [0.00203, -0.000836], [-0.0001729, 0.0000234]),
    term(0, 1, 2, [-0.003956, 0.003039], [0.000069, -0.000604], [-0.0000415, 0.0000702]),
    term(0, 1, 3, [-0.000667, 0.003572], [-0.000247, -0.000567], [0.0000239, 0.0000723]),
    term(0, 2, -2, [0.001276, 0.000501], [-0.000057, 0.000001], [0.0000067, -0.0000067]),
    term(0, 2, -1, [0.001152, -0.000917], [-0.000122, 0.000175], [0.0001034, -0.0000451]),
    term(0, 2, 0, [0.00063, -0.001277], [-0.000049, -0.000164], [-0.0000129, 0.0000504]),
    term(1, -1, 0, [0.002571, -0.000459], [-0.000197, 0.000199], [0.000048, -0.0000231]),
    term(1, -1, 1, [0.000899, -0.001449], [-0.000025, 0.000217], [0.0000002, -0.0000441]),
    term(1, 0, -3, [-0.001016, 0.001043], [0.000589, -0.000248], [-0.0003359, 0.0000265]),
    term(1, 0, -2, [-0.002343, -0.001012], [-0.000269, 0.000711], [0.0007856, -0.0007832]),
    term(1, 0, -1, [0.007042, 0.000788], [0.000185, 0.000193], [0.0000036, 0.0045763]),
    term(1, 0, 0, [0.001199, -0.000338], [0.000315, 0.000807], [0.0008663, 0.0008547]),
    term(1, 0, 1, [0.000418, -0.000067], [-0.00013, -0.000043], [-0.0000809, -0.0000769]),
    term(1, 0, 2, [0.00012, -0.000274], [0.000005, 0.000003], [0.0000263, -0.0000144]),
    term(1, 0, 3, [-0.00006, -0.000159], [0.000002, 0.000017], [-0.0000126, 0.0000032]),
    term(1, 0, 4, [-0.000082, -0.000029], [0.000002, 0.000005], [-0.0000035, -0.0000016]),
    term(1, 1, -3, [-0.000036, -0.000029], [0.000002, 0.000003], [-0.0000019, -0.0000004]),
    term(1, 1, -2, [-0.00004, 0.000007], [0.000003, 0.000001], [-0.0000015, 0.0000008]),
    term(1, 1, -1, [-0.000014, 0.000022], [0.000002, -0.000001], [-0.0000004, 0.0000012]),
    term(1, 1, 0, [0.000004, 0.000013], [0.000001, -0.000001], [0.0000005, 0.0000006]),
    term(1, 1, 1, [0.000005, 0.000002], [0.0, -0.000001], [0.0000003, 0.0000001]),
    term(1, 1, 3, [-0.000001, 0.0], [0.0, 0.0], [0.0000006, -0.0000002]),
    term(2, 0, -6, [0.000002, 0.0], [0.0, -0.000002], [0.0000002, 0.0000002]),
    term(2, 0, -5, [-0.000004, 0.000005], [0.000002, 0.000002], [-0.0000002, -0.0000002]),
    term(2, 0, -4, [0.000004, -0.000007], [-0.000007, 0.0], [0.0000014, 0.0000013]),
    term(2, 0, -3, [0.000014, 0.000024], [0.00001, -0.000008], [-0.0000063, 0.0000013]),
    term(2, 0, -2, [-0.000049, -0.000034], [-0.000003, 0.00002], [0.0000136, -0.0000236]),
    term(2, 0, -1, [0.000163, -0.000048], [0.000006, 0.000005], [0.0000273, 0.0001065]),
    term(2, 0, 0, [0.000009, -0.000024], [0.000014, 0.000017], [0.0000251, 0.0000149]),
    term(2, 0, 1, [-0.000004, 0.000001], [-0.000002, 0.0], [-0.0000025, -0.0000009]),
    term(2, 0, 2, [-0.000003, 0.000001], [0.0, 0.0], [0.0000009, -0.0000002]),
    term(2, 0, 3, [0.000001, 0.000003], [0.0, 0.0], [-0.0000008, 0.0000007]),
    term(3, 0, -2, [-0.000003, -0.000001], [0.0, 0.000001], [0.0000002, -0.000001]),
    term(3, 0, -1, [0.000005, -0.000003], [0.0, 0.0], [0.0000019, 0.0000035]),
    term(3, 0, 0, [0.0, 0.0], [0.000001, 0.0], [0.000001, 0.0000003]),
];

/// Heliocentric ecliptic longitude, latitude and radius vector (AU).
///
/// Results outside 1885 to 2099 are not meaningful.
///
/// # Examples
///
/// ```
/// use astro_formulas::pluto::heliocentric;
///
/// let (l, b, r) = heliocentric(2448908.5);
/// assert!((l.deg() - 232.74071).abs() < 1e-5);
/// assert!((b.deg() - 14.58782).abs() < 1e-5);
/// assert!((r - 29.711111).abs() < 1e-6);
/// ```
pub fn heliocentric(jde: f64) -> (Angle, Angle, f64) {
    let t = j2000_century(jde);
    let jupiter = (34.35 + 3034.9057 * t).to_radians();
    let saturn = (50.08 + 1222.1138 * t).to_radians();
    let pluto = (238.96 + 144.96 * t).to_radians();

    let (mut l, mut b, mut r) = (0.0, 0.0, 0.0);
    for term in &TERMS {
        let (s, c) = (jupiter * term.i + saturn * term.j + pluto * term.k).sin_cos();
        l += term.lon[0] * s + term.lon[1] * c;
        b += term.lat[0] * s + term.lat[1] * c;
        r += term.rad[0] * s + term.rad[1] * c;
    }

    (
        Angle::from_deg(l + 238.958116 + 144.96 * t),
        Angle::from_deg(b - 3.908239),
        r + 40.7241346,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_heliocentric_1992_october_13() {
        let (l, b, r) = heliocentric(2448908.5);
        assert_abs_diff_eq!(l.deg(), 232.740711, epsilon = 1e-6);
        assert_abs_diff_eq!(b.deg(), 14.587817, epsilon = 1e-6);
        assert_abs_diff_eq!(r, 29.711111, epsilon = 1e-6);
    }

    #[test]
    fn test_radius_stays_in_orbit_bounds() {
        // Perihelion near 29.7 AU, aphelion near 49.3 AU
        for year in (1885..2100).step_by(5) {
            let jde = 2451545.0 + (year - 2000) as f64 * 365.25;
            let (_, _, r) = heliocentric(jde);
            assert!(r > 29.0 && r < 50.0, "year {}: r = {}", year, r);
        }
    }
}

/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Bound-state shooting solver for one atomic orbital
//!
//! The eigenvalue search runs in three stages:
//!
//! 1. **Node search**: the trial energy is scaled until the outward solution
//!    has n - l - 1 nodes inside the matching radius.
//! 2. **Bisection**: the node-matched energy is bracketed and bisected on the
//!    sign of the outward solution at the outer radius. A bracket without a
//!    single sign change is scanned or moved until it isolates a level.
//! 3. **Threshold loop**: outward and inward solutions are matched at the
//!    classical turning point and the energy is corrected from the jump in
//!    their logarithmic derivatives until |ΔE/E| meets the threshold.
//!
//! The converged outward and inward solutions are then spliced into one
//! normalized P(r).

use log::{debug, warn};

use super::electron_config::OrbitalConfig;
use super::errors::{ConvergenceWarning, PotentialError, Result};
use super::kinetic::{build_kinetic_term, KineticTerm, MatchIndices};
use super::mesh::RadialMesh;
use super::numerov::{schrodinger_backward, schrodinger_forward};
use super::radial_potential::RadialPotential;
use super::radial_wavefunction::{
    count_nodes, RadialWavefunction, Segment, SegmentArena, WavefunctionStore,
};
use crate::utils::quadrature::{grid_log_derivative, integrate_mesh};

/// Energy scale applied when the outward solution has too few nodes
const TOO_FEW_NODES_SCALE: f64 = 0.75;

/// Energy scale applied when the outward solution has too many nodes
const TOO_MANY_NODES_SCALE: f64 = 1.25;

/// Bracket moves allowed while looking for a level
const MAX_BRACKET_SHIFTS: usize = 30;

/// Sub-intervals sampled when both bracket ends agree in sign
const BRACKET_SCAN_POINTS: usize = 24;

/// Iteration limits and tolerances of the shooting solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverCriteria {
    /// Convergence threshold on |ΔE/E| in the threshold loop
    pub thresh_criterion: f64,
    /// Maximum passes of the threshold loop
    pub max_thresh_iterations: usize,
    /// Maximum energy rescalings in the node search
    pub max_node_iterations: usize,
    /// Maximum bisection steps
    pub max_bisection_iterations: usize,
    /// Bisection stops when the bracket half-width falls below this (Rydberg)
    pub bisection_tolerance: f64,
}

impl Default for SolverCriteria {
    fn default() -> Self {
        Self {
            thresh_criterion: 1.0e-6,
            max_thresh_iterations: 21,
            max_node_iterations: 200,
            max_bisection_iterations: 200,
            bisection_tolerance: 1.0e-9,
        }
    }
}

/// Multipliers of the node-matched energy that bracket the bisection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBracket {
    /// Deeper end, applied to a negative energy
    pub lower: f64,
    /// Shallower end
    pub upper: f64,
}

impl EnergyBracket {
    pub fn neutral() -> Self {
        Self {
            lower: 1.65,
            upper: 0.35,
        }
    }

    /// Positive ions bind more strongly; the deeper end is widened
    pub fn ion() -> Self {
        Self {
            lower: 2.4,
            upper: 0.35,
        }
    }

    pub fn for_ionicity(ionicity: f64) -> Self {
        if ionicity > 0.0 {
            Self::ion()
        } else {
            Self::neutral()
        }
    }
}

impl Default for EnergyBracket {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Converged orbital plus any non-fatal conditions met on the way
#[derive(Debug, Clone, PartialEq)]
pub struct ShotOutcome {
    pub wavefunction: RadialWavefunction,
    pub warnings: Vec<ConvergenceWarning>,
}

/// Result of one outward/inward matching pass
struct MatchingPass {
    indices: MatchIndices,
    delta_energy: f64,
}

/// Shooting solver bound to one mesh and one potential
///
/// The solver holds no mutable state; every shot owns its own scratch
/// storage, so a solver may be shared across orbitals.
pub struct ShootingSolver<'a> {
    mesh: &'a RadialMesh,
    potential: &'a RadialPotential,
    z: f64,
    criteria: SolverCriteria,
    bracket: EnergyBracket,
}

impl<'a> ShootingSolver<'a> {
    pub fn new(
        mesh: &'a RadialMesh,
        potential: &'a RadialPotential,
        z: f64,
        criteria: SolverCriteria,
        bracket: EnergyBracket,
    ) -> Result<Self> {
        if potential.len() != mesh.len() {
            return Err(PotentialError::InvalidMesh(format!(
                "potential has {} points but the mesh has {}",
                potential.len(),
                mesh.len()
            )));
        }
        if mesh.points_per_block() < 3 {
            return Err(PotentialError::InvalidMesh(
                "shooting needs at least three points per block".to_string(),
            ));
        }

        Ok(Self {
            mesh,
            potential,
            z,
            criteria,
            bracket,
        })
    }

    pub fn criteria(&self) -> &SolverCriteria {
        &self.criteria
    }

    /// Find the eigen-energy and normalized wavefunction of `orbital`
    pub fn solve(&self, orbital: &OrbitalConfig) -> Result<ShotOutcome> {
        orbital.validate()?;

        let label = orbital.label();
        let mut warnings = Vec::new();

        let (node_energy, nodes) = self.node_search(orbital, &mut warnings)?;
        let mut energy = self.bisect(
            orbital.l,
            node_energy,
            orbital.required_nodes(),
            &label,
            &mut warnings,
        )?;

        let mut store = WavefunctionStore::default();
        let mut scratch = WavefunctionStore::default();
        let mut indices: Option<MatchIndices> = None;
        let mut iterations = 0;
        let mut converged = false;
        let mut relative_correction = f64::INFINITY;

        while iterations < self.criteria.max_thresh_iterations {
            iterations += 1;

            let Some(pass) = self.match_solutions(orbital.l, energy, &mut scratch)? else {
                debug!("orbital {}: degenerate match at E = {:.6} Ry", label, energy);
                break;
            };
            std::mem::swap(&mut store, &mut scratch);
            indices = Some(pass.indices);

            relative_correction = (pass.delta_energy / energy).abs();
            let corrected = energy + pass.delta_energy;
            if !corrected.is_finite() || corrected >= 0.0 {
                debug!(
                    "orbital {}: correction to unbound energy {:.6} Ry rejected",
                    label, corrected
                );
                break;
            }
            energy = corrected;

            if relative_correction <= self.criteria.thresh_criterion {
                converged = true;
                break;
            }
        }

        let indices = indices.ok_or_else(|| {
            PotentialError::CalculationError(format!(
                "orbital {}: no usable match at E = {}",
                label, energy
            ))
        })?;

        if !converged {
            let warning = ConvergenceWarning::NonConvergence {
                orbital: label.clone(),
                iterations,
                relative_correction,
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        let values = store.splice_normalized(indices.matching, indices.outer);

        debug!(
            "orbital {}: E = {:.6} Ry, {} nodes, {} threshold iterations",
            label, energy, nodes, iterations
        );

        Ok(ShotOutcome {
            wavefunction: RadialWavefunction {
                n: orbital.n,
                l: orbital.l,
                m: orbital.m,
                occupation: orbital.occupation,
                energy,
                values,
                matching_index: indices.matching,
                outer_index: indices.outer,
                nodes,
                thresh_iterations: iterations,
                converged,
            },
            warnings,
        })
    }

    /// Scale the trial energy until the outward solution has n - l - 1 nodes
    ///
    /// Returns the node-matched energy and the node count it produced.
    pub fn node_search(
        &self,
        orbital: &OrbitalConfig,
        warnings: &mut Vec<ConvergenceWarning>,
    ) -> Result<(f64, usize)> {
        let required = orbital.required_nodes();
        let mut energy = orbital.trial_energy;
        let mut arena = SegmentArena::new();
        let mut nodes = 0;

        for _ in 0..self.criteria.max_node_iterations {
            let kinetic = build_kinetic_term(self.potential, self.mesh, orbital.l, energy)?;
            self.integrate_outward(&kinetic, &mut arena)?;

            let values = arena.to_dense(self.mesh.len());
            nodes = count_nodes(&values, kinetic.indices.matching);

            if nodes == required {
                return Ok((energy, nodes));
            }

            energy *= if nodes < required {
                TOO_FEW_NODES_SCALE
            } else {
                TOO_MANY_NODES_SCALE
            };
        }

        let warning = ConvergenceWarning::NodeSearch {
            orbital: orbital.label(),
            iterations: self.criteria.max_node_iterations,
            nodes,
            required,
        };
        warn!("{}", warning);
        warnings.push(warning);

        Ok((energy, nodes))
    }

    /// Locate the level near a node-matched energy and bisect on the sign of P
    /// at the outer radius
    ///
    /// The bracket [lower·E, upper·E] must hold one sign change of P(outer).
    /// When its ends agree in sign the bracket is scanned for an isolated
    /// level, and failing that it is moved toward the side the outward
    /// solution points to. Returns the node-matched energy with an
    /// `EmptyBracket` warning if no level is found.
    pub fn bisect(
        &self,
        l: u32,
        energy: f64,
        required_nodes: usize,
        label: &str,
        warnings: &mut Vec<ConvergenceWarning>,
    ) -> Result<f64> {
        // Below a level the outward solution diverges with sign (-1)^nodes
        let parity = if required_nodes % 2 == 0 { 1.0 } else { -1.0 };
        let mut centre = energy;

        for _ in 0..=MAX_BRACKET_SHIFTS {
            let left = centre * self.bracket.lower;
            let right = centre * self.bracket.upper;
            let p_left = self.outer_value(l, left)?;
            let p_right = self.outer_value(l, right)?;

            if p_left * p_right <= 0.0 {
                return self.refine(l, left, right, p_right, label, warnings);
            }
            if let Some((a, b, p_b)) = self.scan_bracket(l, left, right, centre, required_nodes)? {
                return self.refine(l, a, b, p_b, label, warnings);
            }

            centre = if p_right * parity > 0.0 { right } else { left };
            debug!("orbital {}: no level in bracket, recentring at {:.6} Ry", label, centre);
        }

        let warning = ConvergenceWarning::EmptyBracket {
            orbital: label.to_string(),
            lower: energy * self.bracket.lower,
            upper: energy * self.bracket.upper,
        };
        warn!("{}", warning);
        warnings.push(warning);

        Ok(energy)
    }

    /// Sample P(outer) across [left, right] and return a sign-changing interval
    ///
    /// An interval whose deeper end already carries `required_nodes` nodes
    /// belongs to the wanted level and is preferred; otherwise the interval
    /// nearest `centre` is taken.
    fn scan_bracket(
        &self,
        l: u32,
        left: f64,
        right: f64,
        centre: f64,
        required_nodes: usize,
    ) -> Result<Option<(f64, f64, f64)>> {
        let step = (right - left) / BRACKET_SCAN_POINTS as f64;
        let mut matched: Option<(f64, f64, f64)> = None;
        let mut nearest: Option<(f64, f64, f64)> = None;

        let mut a = left;
        let (mut p_a, mut nodes_a) = self.outer_sample(l, a)?;
        for k in 1..=BRACKET_SCAN_POINTS {
            let b = left + step * k as f64;
            let (p_b, nodes_b) = self.outer_sample(l, b)?;
            if p_a * p_b <= 0.0 {
                if nodes_a == required_nodes && matched.is_none() {
                    matched = Some((a, b, p_b));
                }
                let distance = (0.5 * (a + b) - centre).abs();
                let closer = match nearest {
                    Some((na, nb, _)) => distance < (0.5 * (na + nb) - centre).abs(),
                    None => true,
                };
                if closer {
                    nearest = Some((a, b, p_b));
                }
            }
            a = b;
            p_a = p_b;
            nodes_a = nodes_b;
        }

        Ok(matched.or(nearest))
    }

    /// Bisect a bracket known to hold one sign change of P(outer)
    fn refine(
        &self,
        l: u32,
        mut left: f64,
        mut right: f64,
        mut p_right: f64,
        label: &str,
        warnings: &mut Vec<ConvergenceWarning>,
    ) -> Result<f64> {
        let mut delta = f64::INFINITY;
        let mut mid = left;
        let mut iterations = 0;

        while delta.abs() > self.criteria.bisection_tolerance {
            if iterations >= self.criteria.max_bisection_iterations {
                let warning = ConvergenceWarning::Bisection {
                    orbital: label.to_string(),
                    iterations,
                    half_width: delta.abs(),
                };
                warn!("{}", warning);
                warnings.push(warning);
                break;
            }
            iterations += 1;

            delta = (right - left) / 2.0;
            mid = left + delta;
            let p_mid = self.outer_value(l, mid)?;

            if p_mid * p_right <= 0.0 {
                left = mid;
            } else {
                right = mid;
                p_right = p_mid;
            }
        }

        Ok(mid)
    }

    /// Outward solution at the outer radius for `energy`
    fn outer_value(&self, l: u32, energy: f64) -> Result<f64> {
        self.outer_sample(l, energy).map(|(value, _)| value)
    }

    /// Outward solution at the outer radius and its node count up to there
    fn outer_sample(&self, l: u32, energy: f64) -> Result<(f64, usize)> {
        let kinetic = build_kinetic_term(self.potential, self.mesh, l, energy)?;
        let outer = kinetic.indices.outer;
        let mut arena = SegmentArena::new();
        self.integrate_outward(&kinetic, &mut arena)?;

        let value = arena.value_at(outer).ok_or_else(|| {
            PotentialError::CalculationError(format!(
                "outward integration stopped before the outer radius index {}",
                outer
            ))
        })?;
        let nodes = count_nodes(&arena.to_dense(outer + 1), outer - 1);

        Ok((value, nodes))
    }

    /// One threshold-loop pass: integrate both ways and match at the turning point
    ///
    /// `None` when the solutions vanish at the matching radius.
    fn match_solutions(
        &self,
        l: u32,
        energy: f64,
        store: &mut WavefunctionStore,
    ) -> Result<Option<MatchingPass>> {
        let kinetic = build_kinetic_term(self.potential, self.mesh, l, energy)?;
        let indices = kinetic.indices;
        let matching = indices.matching;
        let (prev, next) = self.mesh.symmetric_neighbors(matching);

        store.clear();
        self.integrate_outward(&kinetic, &mut store.outward)?;
        self.integrate_inward(&kinetic, prev, &mut store.inward)?;

        let r = self.mesh.radii();
        let p_out = store.outward.to_dense(r.len());
        let p_in = store.inward.to_dense(r.len());

        let out_squared: Vec<f64> = p_out.iter().map(|p| p * p).collect();
        let in_squared: Vec<f64> = p_in.iter().map(|p| p * p).collect();
        let out_integral = integrate_mesh(r, &out_squared, 0, matching)?;
        let in_integral = integrate_mesh(r, &in_squared, matching, indices.outer)?;

        let out_match = p_out[matching];
        let in_match = p_in[matching];

        let out_log_derivative =
            grid_log_derivative(p_out[prev], out_match, p_out[next], r[prev], r[next]);
        let in_log_derivative =
            grid_log_derivative(p_in[prev], in_match, p_in[next], r[prev], r[next]);

        let leftside = in_integral / (in_match * in_match) + out_integral / (out_match * out_match);
        let delta_energy = (out_log_derivative - in_log_derivative) / leftside;
        if !leftside.is_finite() || leftside <= 0.0 || !delta_energy.is_finite() {
            return Ok(None);
        }

        store.normalization = 1.0 / leftside.sqrt();
        store.outward_match = out_match;
        store.inward_match = in_match;

        Ok(Some(MatchingPass {
            indices,
            delta_energy,
        }))
    }

    /// Second value of the regular solution from its power series at the origin
    ///
    /// P(r) = r^{l+1}·(1 + A₁r + A₂r² + A₃r³ + A₄r⁴) with coefficients fixed by
    /// the nuclear charge, the energy and the potential at the first two
    /// interior mesh points.
    pub fn origin_seed(&self, l: u32, energy: f64) -> f64 {
        let z = self.z;
        let v = self.potential.v();
        let (v2, v3) = (v[1], v[2]);
        let r = self.mesh.r(1);
        let l = l as f64;

        let b1 = -2.0 * z;
        let b2 = 3.0 * z / r - energy + 2.0 * v2 - v3;
        let b3 = (v3 - v2) / r - z / (r * r);

        let a1 = -z / (l + 1.0);
        let a2 = (a1 * b1 + b2) / (4.0 * l + 6.0);
        let a3 = (a2 * b1 + a1 * b2 + b3) / (6.0 * l + 12.0);
        let a4 = (a3 * b1 + a2 * b2 + a1 * b3) / (8.0 * l + 20.0);

        let series = 1.0 + r * (a1 + r * (a2 + r * (a3 + r * a4)));
        series * r.powf(l + 1.0)
    }

    /// Integrate outward block by block through the block holding the outer radius
    ///
    /// Block 0 starts from P(0) = 0 and the series seed. Each later block k
    /// restarts on the stencil (kN-2, kN, kN+1, ...), whose first interval
    /// already has the doubled step of block k.
    pub fn integrate_outward(&self, kinetic: &KineticTerm, arena: &mut SegmentArena) -> Result<()> {
        let n = self.mesh.points_per_block();
        let r = self.mesh.radii();
        let g = &kinetic.values;
        let last_block = self.mesh.block_of(kinetic.indices.outer);

        arena.clear();

        let seed = self.origin_seed(kinetic.l, kinetic.energy);
        let mut p = schrodinger_forward(&r[..=n], &g[..=n], 0.0, seed)?;
        arena.push(Segment::new(0, 0, p.clone()));

        for block in 1..=last_block {
            let start = block * n;
            let end = start + n;

            let mut x = Vec::with_capacity(n + 2);
            x.push(r[start - 2]);
            x.extend_from_slice(&r[start..=end]);
            let mut gk = Vec::with_capacity(n + 2);
            gk.push(g[start - 2]);
            gk.extend_from_slice(&g[start..=end]);

            let y = schrodinger_forward(&x, &gk, p[start - 2], p[start])?;
            let fresh = y[2..].to_vec();
            p.extend_from_slice(&fresh);
            arena.push(Segment::new(block, start + 1, fresh));
        }

        Ok(())
    }

    /// Integrate inward from the outer radius down to mesh index `lo`
    ///
    /// Starts from the damped exponential P ≈ exp(-r·sqrt|g|) at the outer
    /// radius and the point beyond it. At a block boundary b the doubled-step
    /// stencil (b+1, b, b-2) yields P(b-2), and P(b-1) follows from the Numerov
    /// relation centred on b-1.
    pub fn integrate_inward(
        &self,
        kinetic: &KineticTerm,
        lo: usize,
        arena: &mut SegmentArena,
    ) -> Result<()> {
        let n = self.mesh.points_per_block();
        let r = self.mesh.radii();
        let g = &kinetic.values;
        let outer = kinetic.indices.outer;
        let hi = outer + 1;

        if lo >= outer || hi >= r.len() {
            return Err(PotentialError::CalculationError(format!(
                "inward integration range {}..={} does not fit the mesh",
                lo, hi
            )));
        }

        arena.clear();

        let mut p = vec![0.0; hi + 1];
        p[hi] = (-r[hi] * g[hi].abs().sqrt()).exp();
        p[outer] = (-r[outer] * g[outer].abs().sqrt()).exp();

        let mut top = hi;
        let mut stored_hi = hi;
        loop {
            let block = self.mesh.block_of(top);
            let seg_lo = lo.max(block * n);

            let y = schrodinger_backward(&r[seg_lo..=top], &g[seg_lo..=top], p[top], p[top - 1])?;
            p[seg_lo..=top].copy_from_slice(&y);
            arena.push(Segment::new(block, seg_lo, p[seg_lo..=stored_hi].to_vec()));

            if seg_lo == lo {
                break;
            }

            let b = seg_lo;
            let bridge = schrodinger_backward(
                &[r[b - 2], r[b], r[b + 1]],
                &[g[b - 2], g[b], g[b + 1]],
                p[b + 1],
                p[b],
            )?;
            p[b - 2] = bridge[0];
            p[b - 1] = numerov_centre(r, g, &p, b - 1);

            top = b;
            stored_hi = b - 1;
        }

        Ok(())
    }
}

/// P at `i` from its neighbours on a uniform stencil (i-1, i, i+1)
fn numerov_centre(r: &[f64], g: &[f64], p: &[f64], i: usize) -> f64 {
    let h = r[i + 1] - r[i];
    let c = h * h / 12.0;
    ((1.0 + c * g[i + 1]) * p[i + 1] + (1.0 + c * g[i - 1]) * p[i - 1])
        / (2.0 * (1.0 - 5.0 * c * g[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hydrogen() -> (RadialMesh, RadialPotential) {
        let mesh = RadialMesh::for_atom(1.0, 441).unwrap();
        let potential = RadialPotential::coulomb(&mesh, 1.0).unwrap();
        (mesh, potential)
    }

    fn solver<'a>(mesh: &'a RadialMesh, potential: &'a RadialPotential) -> ShootingSolver<'a> {
        ShootingSolver::new(
            mesh,
            potential,
            1.0,
            SolverCriteria::default(),
            EnergyBracket::neutral(),
        )
        .unwrap()
    }

    #[test]
    fn test_origin_seed_follows_r_power() {
        let (mesh, potential) = hydrogen();
        let solver = solver(&mesh, &potential);
        let r = mesh.r(1);

        assert_relative_eq!(solver.origin_seed(0, -1.0), r, max_relative = 1e-2);
        assert_relative_eq!(solver.origin_seed(2, -1.0), r.powi(3), max_relative = 1e-2);
    }

    #[test]
    fn test_outward_matches_exact_1s_shape() {
        // At E = -1 Ry the regular solution is proportional to r·exp(-r)
        let (mesh, potential) = hydrogen();
        let solver = solver(&mesh, &potential);
        let kinetic = build_kinetic_term(&potential, &mesh, 0, -1.0).unwrap();

        let mut arena = SegmentArena::new();
        solver.integrate_outward(&kinetic, &mut arena).unwrap();
        let p = arena.to_dense(mesh.len());

        let reference = 40;
        let scale = p[reference] / (mesh.r(reference) * (-mesh.r(reference)).exp());
        for i in [80, 120, kinetic.indices.matching] {
            let exact = scale * mesh.r(i) * (-mesh.r(i)).exp();
            assert_relative_eq!(p[i], exact, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_inward_crosses_block_boundaries() {
        let (mesh, potential) = hydrogen();
        let solver = solver(&mesh, &potential);
        let kinetic = build_kinetic_term(&potential, &mesh, 0, -1.0).unwrap();
        let lo = kinetic.indices.matching - 1;

        let mut arena = SegmentArena::new();
        solver.integrate_inward(&kinetic, lo, &mut arena).unwrap();
        assert_eq!(arena.span(), Some((lo, kinetic.indices.outer + 1)));

        // Decaying branch: the inward solution grows monotonically toward the origin
        let p = arena.to_dense(mesh.len());
        assert!(p[lo..=kinetic.indices.outer].windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_hydrogen_ground_state() {
        let (mesh, potential) = hydrogen();
        let solver = solver(&mesh, &potential);
        let orbital = OrbitalConfig::new(1, 0, 0, 1.0, -0.8).unwrap();

        let outcome = solver.solve(&orbital).unwrap();
        let wavefunction = outcome.wavefunction;

        assert!(outcome.warnings.is_empty());
        assert!(wavefunction.converged);
        assert_eq!(wavefunction.nodes, 0);
        assert_relative_eq!(wavefunction.energy, -1.0, epsilon = 1e-3);
        assert_relative_eq!(wavefunction.norm(&mesh).unwrap(), 1.0, epsilon = 1e-3);
        assert!(wavefunction.values[1] > 0.0);
    }

    #[test]
    fn test_hydrogen_excited_states() {
        let (mesh, potential) = hydrogen();
        let solver = solver(&mesh, &potential);

        let s2 = solver
            .solve(&OrbitalConfig::new(2, 0, 0, 1.0, -0.4).unwrap())
            .unwrap();
        assert_eq!(s2.wavefunction.nodes, 1);
        assert_relative_eq!(s2.wavefunction.energy, -0.25, epsilon = 1e-3);

        let p2 = solver
            .solve(&OrbitalConfig::new(2, 1, 0, 1.0, -0.5).unwrap())
            .unwrap();
        assert_eq!(p2.wavefunction.nodes, 0);
        assert_relative_eq!(p2.wavefunction.energy, -0.25, epsilon = 1e-3);
    }

    #[test]
    fn test_energy_bracket() {
        assert_eq!(EnergyBracket::for_ionicity(0.0), EnergyBracket::neutral());
        assert_eq!(EnergyBracket::for_ionicity(1.0).lower, 2.4);
    }
}

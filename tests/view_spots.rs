mod util;
use mesh_viewspots::algs::{
    MissingValuePolicy, ViewSpot, ViewSpotOpts, compute_top_view_spots,
    compute_top_view_spots_with,
};
use mesh_viewspots::mesh_error::ViewSpotError;
use util::*;

#[test]
fn strip_with_two_separate_peaks() {
    // 1-2, 2-3, 3-4 touch; 1 and 3 do not
    let mesh = vertex_chain(&[10.0, 7.0, 10.0, 5.0]);
    let spots = compute_top_view_spots(&mesh, 2).unwrap();
    assert_eq!(spots.len(), 2);
    assert!(spots.iter().all(|s| s.value == 10.0));
    assert_permutation(&ids(&spots), &[1, 3]);
}

#[test]
fn strip_reports_only_true_maxima_for_large_n() {
    let mesh = vertex_chain(&[10.0, 7.0, 10.0, 5.0]);
    let spots = compute_top_view_spots(&mesh, 100).unwrap();
    assert_eq!(ids(&spots), vec![1, 3]);
}

#[test]
fn adjacent_equal_peaks_report_once() {
    let mesh = mesh_from(
        &[(1, &[1, 2, 3]), (2, &[2, 3, 4]), (3, &[4, 5, 6])],
        &[(1, 10.0), (2, 10.0), (3, 2.0)],
    );
    let spots = compute_top_view_spots(&mesh, 5).unwrap();
    assert_eq!(spots, vec![ViewSpot::new(1u64, 10.0)]);
}

#[test]
fn plateau_chain_reports_once() {
    let mesh = vertex_chain(&[3.0, 3.0, 3.0, 3.0]);
    let spots = compute_top_view_spots(&mesh, 10).unwrap();
    assert_eq!(ids(&spots), vec![1]);
}

#[test]
fn isolated_element_is_always_a_view_spot() {
    let mesh = mesh_from(
        &[(1, &[1, 2, 3]), (2, &[2, 3, 4]), (9, &[100, 101, 102])],
        &[(1, 5.0), (2, 8.0), (9, -40.0)],
    );
    let spots = compute_top_view_spots(&mesh, 10).unwrap();
    assert_eq!(ids(&spots), vec![2, 9]);
}

#[test]
fn zero_count_is_empty() {
    let mesh = vertex_chain(&[1.0, 2.0, 3.0]);
    assert!(compute_top_view_spots(&mesh, 0).unwrap().is_empty());
}

#[test]
fn results_descend_by_value() {
    // three separate hills of different height
    let mesh = vertex_chain(&[4.0, 1.0, 9.0, 0.0, 6.0]);
    let spots = compute_top_view_spots(&mesh, 3).unwrap();
    assert_eq!(ids(&spots), vec![3, 5, 1]);
    let spots = compute_top_view_spots(&mesh, 2).unwrap();
    assert_eq!(ids(&spots), vec![3, 5]);
}

#[test]
fn grid_with_single_summit() {
    // 2x2 cells, summit in the upper-right triangle of the last cell
    let values = [0.0, 1.0, 1.0, 2.0, 1.0, 2.0, 2.0, 5.0];
    let mesh = triangle_grid(2, 2, &values);
    let spots = compute_top_view_spots(&mesh, 3).unwrap();
    assert_eq!(spots, vec![ViewSpot::new(7u64, 5.0)]);
}

#[test]
fn orphan_values_do_not_disturb_result() {
    let mut mesh = vertex_chain(&[1.0, 2.0]);
    mesh.push_value(77, 1000.0);
    let spots = compute_top_view_spots(&mesh, 5).unwrap();
    assert_eq!(ids(&spots), vec![2]);
}

#[test]
fn missing_value_fails_atomically() {
    let mut mesh = vertex_chain(&[1.0, 2.0]);
    mesh.push_element(3, [5, 50, 51]);
    let err = compute_top_view_spots(&mesh, 5).unwrap_err();
    assert_eq!(err, ViewSpotError::MissingValue { element: eid(3) });
}

#[test]
fn missing_value_can_be_excluded() {
    // element 3 has no value and touches element 2; it must not block 2
    let mut mesh = vertex_chain(&[1.0, 2.0]);
    mesh.push_element(3, [5, 50, 51]);
    let opts = ViewSpotOpts {
        missing_value: MissingValuePolicy::Exclude,
    };
    let spots = compute_top_view_spots_with(&mesh, 5, opts).unwrap();
    assert_eq!(ids(&spots), vec![2]);
}

#[test]
fn polygons_of_any_size_are_supported() {
    let mesh = mesh_from(
        &[(1, &[1, 2, 3, 4, 5]), (2, &[5, 6]), (3, &[7])],
        &[(1, 2.0), (2, 3.0), (3, 1.0)],
    );
    let spots = compute_top_view_spots(&mesh, 5).unwrap();
    assert_eq!(ids(&spots), vec![2, 3]);
}

#[test]
fn repeated_element_id_completes() {
    // element 1 is listed twice with element 2 between the copies, all on node 1
    let mesh = mesh_from(
        &[(1, &[1, 2, 3]), (2, &[1, 7, 8]), (1, &[1, 5, 6])],
        &[(1, 4.0), (2, 3.0)],
    );
    let spots = compute_top_view_spots(&mesh, 5).unwrap();
    assert_eq!(spots, vec![ViewSpot::new(1u64, 4.0)]);
}

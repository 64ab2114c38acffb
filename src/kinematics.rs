///____________________________________________________________________________________________________________________________
/// # Motion along a path
/// the request workflow: parse the time and the path, differentiate the path twice and evaluate
/// position, velocity and acceleration at the given time. [`motion::MotionTask::solve`] installs the logger
/// and runs the workflow, optionally together with a trajectory sweep.
///# Example
/// ```
/// use RustedKinematics::kinematics::motion::compute_motion;
/// let result = compute_motion("2", "x*x*x").unwrap();
/// assert_eq!((result.position, result.velocity, result.acceleration), (8.0, 12.0, 12.0));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod motion;
/// number of fractional digits of the printed results
pub mod precision;
/// motion task from a text document
pub mod task;
/// position, velocity and acceleration sampled on a time grid
pub mod trajectory;

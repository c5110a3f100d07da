use reviewbot_config::{Config, InputReader};
use reviewbot_ghapi_interface::ApiService;

use crate::{reporting::Reporter, CoreModule};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub reporter: &'a (dyn Reporter + 'a),
    pub input_reader: &'a (dyn InputReader + 'a),
}

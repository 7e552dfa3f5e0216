//! Init-script assembly: one textual JS artifact per context.
//!
//! The injected payload is a fixed template with a single
//! `__CLOAK_PARAMS__` placeholder that receives the serialized fingerprint
//! and viewport plan. Everything is getter redefinition, never plain
//! assignment: repeated reads stay consistent and introspection sees an
//! accessor. Each section guards itself with try/catch — an absent
//! override target (no WebGL, no permissions API) skips silently and must
//! never abort page load.

use crate::cloak::hooks;
use crate::cloak::identity;
use crate::cloak::viewport::ViewportPlan;
use crate::error::{Error, Result};
use crate::fingerprint::record::FingerprintRecord;
use serde::Serialize;

/// Pixels reserved for browser chrome when reporting `innerHeight`.
pub const CHROME_BAR_ALLOWANCE: u32 = 74;

/// Parameters embedded into the script, shaped the way the JS reads them.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitParams<'a> {
    fingerprint: &'a FingerprintRecord,
    dimension: ViewportPlan,
    log_overrides: bool,
}

const INIT_SCRIPT_TEMPLATE: &str = r#"
(() => {
  const params = __CLOAK_PARAMS__;
  const fp = params.fingerprint;
  const dim = params.dimension;

  const logOverride = (key, value) => {
    if (params.logOverrides) console.warn(`overridden: ${key}=${value}`);
    return value;
  };

  const defineGetter = (target, key, value) => {
    try {
      Object.defineProperty(target, key, {
        get: () => logOverride(key, value),
        configurable: true,
      });
    } catch (e) {}
  };

  // Screen and window geometry.
  defineGetter(window.screen, 'width', fp.screenWidth);
  defineGetter(window.screen, 'availWidth', fp.screenWidth);
  defineGetter(window.screen, 'height', fp.screenHeight);
  defineGetter(window.screen, 'availHeight', fp.screenHeight);
  defineGetter(window, 'innerWidth', dim.width);
  defineGetter(window, 'outerWidth', dim.width);
  defineGetter(window, 'innerHeight', dim.height - __CHROME_BAR__);
  defineGetter(window, 'outerHeight', dim.height);

  // Navigator identity.
  defineGetter(window.navigator, 'userAgent', fp.userAgent);
  defineGetter(window.navigator, 'platform', fp.platform);
  defineGetter(window.navigator, 'appName', fp.appName);
  defineGetter(window.navigator, 'appVersion',
    fp.userAgent.substring(fp.userAgent.indexOf('/') + 1));
  defineGetter(window.navigator, 'languages', ['en-US', 'en']);

  // Drop the automation flag from the prototype chain.
  try {
    const proto = Object.getPrototypeOf(navigator);
    delete proto.webdriver;
    Object.setPrototypeOf(navigator, proto);
  } catch (e) {}

  // WebRTC surfaces leak local addresses; present them as absent.
  for (const key of ['MediaStreamTrack', 'RTCPeerConnection', 'RTCSessionDescription',
                     'webkitMediaStreamTrack', 'webkitRTCPeerConnection',
                     'webkitRTCSessionDescription']) {
    defineGetter(window, key, undefined);
  }
  defineGetter(window.navigator, 'getUserMedia', undefined);
  defineGetter(window.navigator, 'webkitGetUserMedia', undefined);

  // Plugin list and chrome.runtime as a headful consumer Chrome has them.
  try {
    const plugins = [
      { name: 'Chrome PDF Plugin', filename: 'internal-pdf-viewer',
        description: 'Portable Document Format' },
      { name: 'Chrome PDF Viewer', filename: 'mhjfbmdgcfjbbpaeojofohoefgiehjai',
        description: '' },
      { name: 'Native Client',
        filename: fp.platform === 'Win32' ? 'pepflashplayer.dll' : 'internal-nacl-plugin',
        description: '' },
      { name: 'Widevine Content Decryption Module',
        filename: fp.platform === 'Win32' ? 'widevinecdmadapter.dll' : 'widevinecdmadapter.plugin',
        description: 'Enables Widevine licenses for playback of HTML audio/video content.' },
    ];
    plugins.item = (i) => plugins[i];
    plugins.namedItem = (name) => plugins.find((p) => p.name === name) || null;
    plugins.refresh = () => {};
    defineGetter(window.navigator, 'plugins', plugins);
  } catch (e) {}

  if (!window.chrome) { window.chrome = {}; }
  if (!window.chrome.runtime) {
    window.chrome.runtime = { connect: function () {}, sendMessage: function () {} };
  }

  // Permissions: notifications reports the live state, the rest passes
  // through to the original query.
  try {
    const permissions = window.navigator.permissions;
    const originalQuery = permissions.query;
    Object.getPrototypeOf(permissions).query = (parameters) =>
      parameters.name === 'notifications'
        ? Promise.resolve({ state: Notification.permission })
        : originalQuery.call(permissions, parameters);
  } catch (e) {}

  // Context acquisition never throws; unsupported types fall back to the
  // alias the browser actually supports.
  try {
    const canvasProto = Object.getPrototypeOf(document.createElement('canvas'));
    const nativeGetContext = canvasProto.getContext;
    const aliases = { 'experimental-webgl': 'webgl', webgl: 'experimental-webgl' };
    canvasProto.getContext = function getContext(type, ...rest) {
      let context = null;
      try { context = nativeGetContext.call(this, type, ...rest); } catch (e) {}
      if (!context) {
        try { context = nativeGetContext.call(this, aliases[type] || type); } catch (e) {}
      }
      return context;
    };
  } catch (e) {}

  // WebGL identity plus plausible hardware limits.
  const GL_OVERRIDES = {
    37445: () => fp.webglVendor,                // UNMASKED_VENDOR_WEBGL
    37446: () => fp.webglRenderer,              // UNMASKED_RENDERER_WEBGL
    33901: () => new Float32Array([1, 8191]),   // ALIASED_POINT_SIZE_RANGE
    3386: () => new Int32Array([16384, 16384]), // MAX_VIEWPORT_DIMS
    35661: () => 80,                            // MAX_COMBINED_TEXTURE_IMAGE_UNITS
    34076: () => 16384,                         // MAX_CUBE_MAP_TEXTURE_SIZE
    36349: () => 1024,                          // MAX_FRAGMENT_UNIFORM_VECTORS
    34024: () => 16384,                         // MAX_RENDERBUFFER_SIZE
    3379: () => 16384,                          // MAX_TEXTURE_SIZE
    34921: () => 16,                            // MAX_VERTEX_ATTRIBS
    36347: () => 1024,                          // MAX_VERTEX_UNIFORM_VECTORS
  };
  for (const type of ['webgl', 'experimental-webgl']) {
    try {
      const gl = document.createElement('canvas').getContext(type);
      if (!gl) continue;
      const glProto = Object.getPrototypeOf(gl);
      const nativeGetParameter = glProto.getParameter;
      glProto.getParameter = function getParameter(parameter, ...rest) {
        const override = GL_OVERRIDES[parameter];
        if (override) return logOverride('gl.' + parameter, override());
        return nativeGetParameter.call(this, parameter, ...rest);
      };
    } catch (e) {}
  }

__HOOK_SECTION__
__IDENTITY_SHIM__
})();
"#;

/// Build the init script for one context.
///
/// Pure: the same record, plan and flags always produce the same text.
/// Installation (and re-installation on every navigation) is the driver's
/// job — getters and prototype patches do not survive a navigation.
pub fn build_init_script(
    record: &FingerprintRecord,
    plan: ViewportPlan,
    log_overrides: bool,
) -> Result<String> {
    let params = serde_json::to_string(&InitParams {
        fingerprint: record,
        dimension: plan,
        log_overrides,
    })
    .map_err(|e| Error::injection(format!("failed to encode cloak parameters: {e}")))?;

    Ok(INIT_SCRIPT_TEMPLATE
        .replace("__CLOAK_PARAMS__", &params)
        .replace("__CHROME_BAR__", &CHROME_BAR_ALLOWANCE.to_string())
        .replace("__HOOK_SECTION__", &hooks::hook_section())
        .replace("__IDENTITY_SHIM__", identity::IDENTITY_SHIM_JS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::corpus::DeviceProfile;
    use crate::fingerprint::digest::SessionDigest;
    use crate::fingerprint::webgl::WEBGL_VENDOR;

    fn test_record() -> FingerprintRecord {
        let device = DeviceProfile {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) TestKit/1.0".to_string(),
            platform: "Win32".to_string(),
            app_name: "Netscape".to_string(),
            device_category: "desktop".to_string(),
            viewport_width: 1536,
            viewport_height: 754,
            screen_width: 1536,
            screen_height: 864,
        };
        FingerprintRecord::new(
            device,
            WEBGL_VENDOR.to_string(),
            "ANGLE (NVIDIA GeForce GTX 760 Direct3D11 vs_5_0 ps_5_0)".to_string(),
            SessionDigest::new("script-test").unwrap(),
        )
    }

    fn test_script() -> String {
        let record = test_record();
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        build_init_script(&record, plan, false).unwrap()
    }

    #[test]
    fn test_placeholders_fully_substituted() {
        let js = test_script();
        assert!(!js.contains("__CLOAK_PARAMS__"));
        assert!(!js.contains("__CHROME_BAR__"));
        assert!(!js.contains("__HOOK_SECTION__"));
        assert!(!js.contains("__IDENTITY_SHIM__"));
    }

    #[test]
    fn test_script_carries_fingerprint_values() {
        let record = test_record();
        let js = test_script();
        assert!(js.contains(&record.device.user_agent));
        assert!(js.contains(&record.webgl_renderer));
        assert!(js.contains(&record.webgl_vendor));
        assert!(js.contains(&record.buid));
    }

    #[test]
    fn test_script_removes_automation_flag() {
        let js = test_script();
        assert!(js.contains("delete proto.webdriver"));
        assert!(js.contains("Object.setPrototypeOf(navigator, proto)"));
    }

    #[test]
    fn test_script_disables_webrtc_surfaces() {
        let js = test_script();
        for key in [
            "MediaStreamTrack",
            "RTCPeerConnection",
            "RTCSessionDescription",
            "webkitRTCPeerConnection",
        ] {
            assert!(js.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_script_spoofs_webgl_debug_enums() {
        let js = test_script();
        assert!(js.contains("37445"));
        assert!(js.contains("37446"));
        assert!(js.contains("fp.webglVendor"));
        assert!(js.contains("fp.webglRenderer"));
    }

    #[test]
    fn test_script_has_context_fallback_aliases() {
        let js = test_script();
        assert!(js.contains("'experimental-webgl': 'webgl'"));
        assert!(js.contains("webgl: 'experimental-webgl'"));
    }

    #[test]
    fn test_inner_height_reduced_by_chrome_allowance() {
        let js = test_script();
        assert!(js.contains(&format!("dim.height - {CHROME_BAR_ALLOWANCE}")));
    }

    #[test]
    fn test_script_embeds_hooks_and_identity_shim() {
        let js = test_script();
        assert!(js.contains("hookMethods"));
        assert!(js.contains(identity::NATIVE_QUERY_SOURCE));
    }

    #[test]
    fn test_parameters_json_escaped() {
        let mut record = test_record();
        record.device.user_agent = "Mozilla/5.0 \"quoted\" \\backslash".to_string();
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        let js = build_init_script(&record, plan, false).unwrap();
        assert!(js.contains(r#"\"quoted\""#));
    }

    #[test]
    fn test_same_inputs_same_script() {
        let record = test_record();
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        let a = build_init_script(&record, plan, true).unwrap();
        let b = build_init_script(&record, plan, true).unwrap();
        assert_eq!(a, b);
    }
}

//! Method-call hooking: an explicit table of wrapped prototype targets.
//!
//! Every function-valued prototype property of each table entry is wrapped
//! in a passthrough that preserves arity and behavior. The single special
//! case is 2D canvas text drawing, where the drawn string is replaced with
//! the per-session `buid` token and the coordinates are nudged to a
//! canonical offset — the canvas still renders, but its pixel hash encodes
//! the synthetic session instead of the real environment.

/// How a hooked target's calls are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookRule {
    /// Delegate unchanged (optionally logged).
    Passthrough,
    /// Substitute fillText/strokeText text with the session token.
    PoisonCanvasText,
}

/// One hooked object: a label for instrumentation, the JS expression that
/// acquires the object inside the page, and the rule applied to its calls.
#[derive(Debug, Clone, Copy)]
pub struct HookTarget {
    pub label: &'static str,
    pub acquire: &'static str,
    pub rule: HookRule,
}

/// The full set of hooked objects. Kept explicit so each entry can be
/// reviewed and tested on its own instead of wrapping prototypes wholesale.
pub const HOOK_TARGETS: &[HookTarget] = &[
    HookTarget {
        label: "screen",
        acquire: "window.screen",
        rule: HookRule::Passthrough,
    },
    HookTarget {
        label: "navigator",
        acquire: "window.navigator",
        rule: HookRule::Passthrough,
    },
    HookTarget {
        label: "history",
        acquire: "window.history",
        rule: HookRule::Passthrough,
    },
    HookTarget {
        label: "canvas",
        acquire: "document.createElement('canvas')",
        rule: HookRule::Passthrough,
    },
    HookTarget {
        label: "2d",
        acquire: "document.createElement('canvas').getContext('2d')",
        rule: HookRule::PoisonCanvasText,
    },
    HookTarget {
        label: "webgl",
        acquire: "document.createElement('canvas').getContext('webgl')",
        rule: HookRule::Passthrough,
    },
    HookTarget {
        label: "experimental-webgl",
        acquire: "document.createElement('canvas').getContext('experimental-webgl')",
        rule: HookRule::Passthrough,
    },
];

/// JS defining the hook runtime. Expects a `params` object in scope with
/// `fingerprint.buid` and `logOverrides`.
pub const HOOK_RUNTIME_JS: &str = r#"
  const hookMethods = (label, target, poisonText) => {
    if (!target) return;
    const proto = Object.getPrototypeOf(target);
    const originals = {};
    for (const name of Object.getOwnPropertyNames(proto)) {
      let fn;
      try { fn = proto[name]; } catch (e) { continue; }
      if (typeof fn !== 'function') continue;
      originals[name] = fn;
      const wrapped = function (...args) {
        if (poisonText && (name === 'fillText' || name === 'strokeText')) {
          const poisoned = Array.from(args);
          poisoned[0] = params.fingerprint.buid;
          poisoned[1] = Math.max(0, poisoned[1] - 2);
          poisoned[2] = Math.max(0, poisoned[2] - 2);
          return originals[name].apply(this, poisoned);
        }
        const result = originals[name].apply(this, args);
        if (params.logOverrides) {
          try { console.warn('hooked call', label, name, JSON.stringify(args)); } catch (e) {}
        }
        return result;
      };
      // Rest-parameter wrappers report length 0 and no name; mirror the
      // native function so introspection matches.
      try {
        Object.defineProperty(wrapped, 'name', { value: name });
        Object.defineProperty(wrapped, 'length', { value: fn.length });
      } catch (e) {}
      proto[name] = wrapped;
    }
  };
"#;

/// Generate the hook installation lines from the table. Each target is
/// acquired and hooked inside its own try so an absent surface (no WebGL,
/// no 2D context) skips silently.
pub fn hook_section() -> String {
    let mut out = String::from(HOOK_RUNTIME_JS);
    for target in HOOK_TARGETS {
        let poison = matches!(target.rule, HookRule::PoisonCanvasText);
        out.push_str(&format!(
            "  try {{ hookMethods('{}', {}, {}); }} catch (e) {{}}\n",
            target.label, target.acquire, poison
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_required_targets() {
        let labels: Vec<&str> = HOOK_TARGETS.iter().map(|t| t.label).collect();
        for required in ["screen", "navigator", "history", "canvas", "2d", "webgl"] {
            assert!(labels.contains(&required), "missing target {required}");
        }
    }

    #[test]
    fn test_only_2d_poisons_text() {
        for target in HOOK_TARGETS {
            if target.label == "2d" {
                assert_eq!(target.rule, HookRule::PoisonCanvasText);
            } else {
                assert_eq!(target.rule, HookRule::Passthrough);
            }
        }
    }

    #[test]
    fn test_section_installs_every_target() {
        let js = hook_section();
        for target in HOOK_TARGETS {
            assert!(js.contains(target.acquire), "missing {}", target.acquire);
        }
        // Text poisoning is keyed on the buid token and the canonical
        // two-pixel nudge.
        assert!(js.contains("params.fingerprint.buid"));
        assert!(js.contains("poisoned[1] - 2"));
        assert!(js.contains("hookMethods('2d'"));
        assert!(js.contains("true); } catch"));
    }

    #[test]
    fn test_wrappers_mirror_native_name_and_length() {
        assert!(HOOK_RUNTIME_JS.contains("Object.defineProperty(wrapped, 'name', { value: name })"));
        assert!(HOOK_RUNTIME_JS.contains("Object.defineProperty(wrapped, 'length', { value: fn.length })"));
    }
}

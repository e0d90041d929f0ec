//! Fixed prompt material. All of it is constant data assembled into
//! outbound requests; none of it is derived from user input.

/// System instruction for the relevance gate.
pub const CLASSIFIER_SYSTEM_PROMPT: &str = "You are an assistant that determines whether a given prompt is related to test generation for software testing scenarios. Reply with 'Yes' or 'No' only.";

/// System instruction for the test generator. The syntax reference and,
/// optionally, the example test are appended to this.
pub const GENERATOR_ROLE_PROMPT: &str = "You are an expert assistant in generating complete Unity test scripts using the Arium test automation framework. Your output must be valid C# Unity test code and must be strictly based on the Arium framework. Do NOT include any setup, installation, or general framework instructions in your final output; output only the necessary test code, wrapped in a ```csharp code block.";

/// The handful of API calls the Arium framework exposes.
pub const ARIUM_SYNTAX_REFERENCE: &str = r#"Arium Framework Syntax Reference:
1. Instantiate Arium:
   Arium _arium = new Arium();
2. Find GameObjects:
   _arium.FindGameObject("Display");
   _arium.FindGameObject("Display", true);
3. Get Components:
   _arium.GetComponent<ComponentName>("GameObjectName");
4. Perform Actions:
   _arium.PerformAction(new UnityPointerClick(), "GameObjectName");
5. Unity Event System:
   UnityEventSystemInteraction<T>.PerformAction("GameObjectName");
"#;

/// A complete, idiomatic Arium test file: setup, ordered cases, assertions
/// and waits. Included in generation requests when the example-grounded
/// profile is active.
pub const ARIUM_EXAMPLE_TEST: &str = r#"using System.Collections;
using NUnit.Framework;
using UnityEngine;
using UnityEngine.TestTools;
using UnityEngine.UI;

public class CounterButtonTest
{
    private Arium _arium;

    [OneTimeSetUp]
    public void SetUp()
    {
        _arium = new Arium();
    }

    [UnityTest, Order(1)]
    public IEnumerator ShouldIncrementCounterOnClick()
    {
        _arium.PerformAction(new UnityPointerClick(), "IncrementButton");
        yield return null;

        Text display = _arium.GetComponent<Text>("Display");
        Assert.AreEqual("1", display.text);
    }

    [UnityTest, Order(2)]
    public IEnumerator ShouldResetCounterViaEventSystem()
    {
        UnityEventSystemInteraction<Button>.PerformAction("ResetButton");
        yield return new WaitForSeconds(0.5f);

        Text display = _arium.GetComponent<Text>("Display");
        Assert.AreEqual("0", display.text);
    }
}
"#;
